//! Integration tests for dialog coordination.

use vpt_core::{DialogCoordinator, DialogState, EntryStore};
use vpt_model::{EntryId, Roster, Status};

#[test]
fn edit_from_detail_view_passes_through_idle() {
    let store = EntryStore::demo();
    let entry = store.get(&EntryId::new("1")).unwrap();
    let mut dialogs = DialogCoordinator::new();

    assert_eq!(dialogs.view(entry), &DialogState::Viewing(entry.id.clone()));
    assert_eq!(dialogs.edit(entry), &DialogState::Idle);
    assert!(dialogs.has_pending());
    assert_eq!(dialogs.settle(), &DialogState::Editing(entry.id.clone()));

    assert_eq!(
        dialogs.history(),
        &[
            DialogState::Viewing(entry.id.clone()),
            DialogState::Idle,
            DialogState::Editing(entry.id.clone()),
        ]
    );
}

#[test]
fn edit_from_list_opens_directly() {
    let store = EntryStore::demo();
    let entry = store.get(&EntryId::new("2")).unwrap();
    let mut dialogs = DialogCoordinator::new();

    assert_eq!(dialogs.edit(entry), &DialogState::Editing(entry.id.clone()));
    assert!(!dialogs.has_pending());
    assert_eq!(dialogs.draft().unwrap().title.as_deref(), Some(entry.title.as_str()));
}

#[test]
fn opening_second_entry_closes_first() {
    let store = EntryStore::demo();
    let first = store.get(&EntryId::new("1")).unwrap();
    let second = store.get(&EntryId::new("2")).unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.edit(first);
    assert_eq!(dialogs.view(second), &DialogState::Idle);
    assert!(dialogs.draft().is_none());
    assert_eq!(dialogs.settle(), &DialogState::Viewing(second.id.clone()));
}

#[test]
fn request_while_closing_retargets() {
    let store = EntryStore::demo();
    let first = store.get(&EntryId::new("1")).unwrap();
    let second = store.get(&EntryId::new("2")).unwrap();
    let third = store.get(&EntryId::new("3")).unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.view(first);
    dialogs.edit(second);
    assert_eq!(dialogs.view(third), &DialogState::Idle);
    assert_eq!(dialogs.settle(), &DialogState::Viewing(third.id.clone()));
}

#[test]
fn save_applies_draft_and_closes() {
    let roster = Roster::default();
    let mut store = EntryStore::demo();
    let entry = store.get(&EntryId::new("4")).cloned().unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.edit(&entry);
    dialogs.draft_mut().unwrap().status = Some(Status::Published);
    dialogs.save(&mut store, &roster).unwrap();

    assert_eq!(dialogs.state(), &DialogState::Idle);
    assert_eq!(store.get(&entry.id).unwrap().status, Status::Published);
}

#[test]
fn failed_save_keeps_editor_open() {
    let roster = Roster::default();
    let mut store = EntryStore::demo();
    let entry = store.get(&EntryId::new("4")).cloned().unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.edit(&entry);
    dialogs.draft_mut().unwrap().title = Some(String::new());
    assert!(dialogs.save(&mut store, &roster).is_err());

    assert_eq!(dialogs.state(), &DialogState::Editing(entry.id.clone()));
    assert_eq!(store.get(&entry.id), Some(&entry));
}

#[test]
fn cancel_discards_draft_without_touching_store() {
    let mut store = EntryStore::demo();
    let entry = store.get(&EntryId::new("4")).cloned().unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.edit(&entry);
    dialogs.draft_mut().unwrap().title = Some("Changed".to_string());
    assert_eq!(dialogs.cancel(), &DialogState::Idle);
    assert!(dialogs.draft().is_none());
    assert_eq!(store.get(&entry.id), Some(&entry));

    assert!(dialogs.save(&mut store, &Roster::default()).is_err());
}

#[test]
fn deleting_open_entry_closes_dialog() {
    let mut store = EntryStore::demo();
    let entry = store.get(&EntryId::new("6")).cloned().unwrap();
    let mut dialogs = DialogCoordinator::new();

    dialogs.view(&entry);
    store.remove(&entry.id).unwrap();
    dialogs.reconcile(&store);
    assert_eq!(dialogs.state(), &DialogState::Idle);
}
