//! Edit/detail dialog coordination.
//!
//! At most one entry is open for viewing or editing at a time. Switching
//! from one open dialog to another never happens in a single step: the open
//! dialog closes first (state `Idle` with a pending target) and the renderer
//! calls [`DialogCoordinator::settle`] once the closing dialog is gone.

use std::fmt;

use tracing::debug;

use vpt_model::{Entry, EntryId, EntryPatch, Result, Roster, TrackerError};

use crate::store::EntryStore;

/// Which dialog is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    Viewing(EntryId),
    Editing(EntryId),
}

impl DialogState {
    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            DialogState::Idle => None,
            DialogState::Viewing(id) | DialogState::Editing(id) => Some(id),
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogState::Idle => write!(f, "idle"),
            DialogState::Viewing(id) => write!(f, "viewing {id}"),
            DialogState::Editing(id) => write!(f, "editing {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    View(EntryId),
    Edit(EntryId, EntryPatch),
}

/// Single-selection dialog state machine shared by every view.
#[derive(Debug, Clone, Default)]
pub struct DialogCoordinator {
    state: DialogState,
    pending: Option<Target>,
    /// Edit-form draft; present only while editing.
    draft: Option<EntryPatch>,
    history: Vec<DialogState>,
}

impl DialogCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// True while waiting for the renderer to finish closing a dialog.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// States entered so far, oldest first.
    pub fn history(&self) -> &[DialogState] {
        &self.history
    }

    pub fn draft(&self) -> Option<&EntryPatch> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EntryPatch> {
        self.draft.as_mut()
    }

    /// "View details" on an entry.
    pub fn view(&mut self, entry: &Entry) -> &DialogState {
        self.request(Target::View(entry.id.clone()))
    }

    /// "Edit" from the detail dialog or straight from a list or bin.
    pub fn edit(&mut self, entry: &Entry) -> &DialogState {
        self.request(Target::Edit(entry.id.clone(), EntryPatch::from_entry(entry)))
    }

    /// Completes a scheduled open once the previous dialog has closed.
    pub fn settle(&mut self) -> &DialogState {
        if let Some(target) = self.pending.take() {
            self.open(target);
        }
        &self.state
    }

    /// Closes the detail dialog.
    pub fn close(&mut self) -> &DialogState {
        self.dismiss();
        &self.state
    }

    /// Abandons an edit. The draft is discarded and the store is untouched.
    pub fn cancel(&mut self) -> &DialogState {
        self.dismiss();
        &self.state
    }

    /// Applies the edit draft to the store.
    ///
    /// On success the dialog closes. On failure the editor stays open with
    /// its draft so the user can correct it.
    pub fn save(&mut self, store: &mut EntryStore, roster: &Roster) -> Result<()> {
        let (DialogState::Editing(id), Some(draft)) = (&self.state, &self.draft) else {
            return Err(TrackerError::operation("save entry", "no entry is being edited"));
        };
        store.update(id, draft, roster)?;
        self.dismiss();
        Ok(())
    }

    /// Closes the open dialog if its entry has been deleted.
    pub fn reconcile(&mut self, store: &EntryStore) {
        if let Some(id) = self.state.entry_id()
            && store.get(id).is_none()
        {
            debug!(id = %id, "open entry no longer exists");
            self.dismiss();
        }
        if let Some(Target::View(id) | Target::Edit(id, _)) = &self.pending
            && store.get(id).is_none()
        {
            self.pending = None;
        }
    }

    fn request(&mut self, target: Target) -> &DialogState {
        match self.state {
            DialogState::Idle => {
                if self.pending.is_some() {
                    // Still closing: retarget instead of opening early.
                    self.pending = Some(target);
                } else {
                    self.open(target);
                }
            }
            DialogState::Viewing(_) | DialogState::Editing(_) => {
                self.enter(DialogState::Idle);
                self.draft = None;
                self.pending = Some(target);
            }
        }
        &self.state
    }

    fn open(&mut self, target: Target) {
        match target {
            Target::View(id) => {
                self.draft = None;
                self.enter(DialogState::Viewing(id));
            }
            Target::Edit(id, draft) => {
                self.draft = Some(draft);
                self.enter(DialogState::Editing(id));
            }
        }
    }

    fn dismiss(&mut self) {
        self.pending = None;
        self.draft = None;
        if self.state != DialogState::Idle {
            self.enter(DialogState::Idle);
        }
    }

    fn enter(&mut self, state: DialogState) {
        debug!(from = %self.state, to = %state, "dialog transition");
        self.state = state.clone();
        self.history.push(state);
    }
}
