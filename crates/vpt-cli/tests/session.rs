//! Scripted dashboard sessions.

use std::io::Cursor;

use vpt_cli::config::Workspace;
use vpt_cli::session::{Flow, Session, split_words};
use vpt_core::{DialogState, EntryStore, SessionGate};
use vpt_model::{EntryId, Roster, Status};

const ADD_PAIR: &str = "add --athlete \"Taylor Brooks\" --athlete \"Riley Evans\" \
    --shooter Liam --editor \"Marcus Chen\" --date 2024-03-01 --title \"Spring highlight\"";

fn session(store: EntryStore) -> Session<Vec<u8>> {
    Session::new(
        Workspace::new(store, Roster::default()),
        SessionGate::new("worb"),
        Vec::new(),
    )
}

fn run_lines(session: &mut Session<Vec<u8>>, lines: &[&str]) {
    for line in lines {
        assert_eq!(session.execute_line(line).unwrap(), Flow::Continue, "{line}");
    }
}

fn output(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn split_words_keeps_quoted_phrases() {
    let words = split_words("add  --title \"Two words\" --athlete Zoe").unwrap();
    assert_eq!(words, vec!["add", "--title", "Two words", "--athlete", "Zoe"]);
    assert!(split_words("   ").unwrap().is_empty());
}

#[test]
fn split_words_keeps_quoted_empty_word() {
    let words = split_words("set --link \"\"  --title \"a  b\"").unwrap();
    assert_eq!(words, vec!["set", "--link", "", "--title", "a  b"]);
}

#[test]
fn commands_require_login() {
    let mut session = session(EntryStore::demo());
    run_lines(&mut session, &["stats", "login nope", "login worb", "stats"]);
    let text = output(session);

    assert!(text.contains("not logged in"));
    assert!(text.contains("Invalid password. Please try again."));
    assert!(text.contains("Logged in"));
    assert!(text.contains("Total videos: 10"));
}

#[test]
fn add_creates_one_entry_per_athlete() {
    let mut session = session(EntryStore::new());
    run_lines(&mut session, &["login worb", ADD_PAIR]);

    let store = &session.workspace().store;
    assert_eq!(store.len(), 2);
    let athletes: Vec<&str> = store.entries().iter().map(|e| e.athlete.as_str()).collect();
    assert_eq!(athletes, vec!["Taylor Brooks", "Riley Evans"]);
    assert_eq!(store.entries()[0].created_at, store.entries()[1].created_at);
    assert_eq!(store.entries()[0].status, Status::Completed);

    assert!(output(session).contains("Added 2 entries: v000001, v000002"));
}

#[test]
fn incomplete_add_is_refused() {
    let mut session = session(EntryStore::new());
    run_lines(&mut session, &["login worb", "add --athlete \"Taylor Brooks\" --title Clip"]);

    assert!(session.workspace().store.is_empty());
    assert!(output(session).contains("Please fill in all required fields"));
}

#[test]
fn edit_set_save_updates_entry() {
    let mut session = session(EntryStore::new());
    run_lines(
        &mut session,
        &[
            "login worb",
            ADD_PAIR,
            "view v000001",
            "edit v000001",
            "set --title \"Final cut\" --status published",
            "save",
        ],
    );

    let entry = session.workspace().store.get(&EntryId::new("v000001")).unwrap();
    assert_eq!(entry.title, "Final cut");
    assert_eq!(entry.status, Status::Published);
    assert_eq!(session.dialogs().state(), &DialogState::Idle);

    let text = output(session);
    assert!(text.contains("Closed viewing v000001"));
    assert!(text.contains("Saved v000001"));
}

#[test]
fn save_with_blank_title_keeps_editing() {
    let mut session = session(EntryStore::new());
    run_lines(
        &mut session,
        &["login worb", ADD_PAIR, "edit v000002", "set --title \" \"", "save"],
    );

    assert_eq!(
        session.dialogs().state(),
        &DialogState::Editing(EntryId::new("v000002"))
    );
    assert!(output(session).contains("Failed to update video"));
}

#[test]
fn delete_needs_confirmation() {
    let mut session = session(EntryStore::new());
    run_lines(
        &mut session,
        &[
            "login worb",
            ADD_PAIR,
            "view v000001",
            "delete v000001",
        ],
    );
    assert_eq!(session.workspace().store.len(), 2);

    run_lines(&mut session, &["delete v000001 --yes", "delete v000001 --yes"]);
    assert_eq!(session.workspace().store.len(), 1);
    assert_eq!(session.dialogs().state(), &DialogState::Idle);

    let text = output(session);
    assert!(text.contains("Repeat with --yes to confirm."));
    assert!(text.contains("Deleted v000001 (Spring highlight)"));
    assert!(text.contains("Nothing to delete: v000001 is not in the tracker"));
}

#[test]
fn export_of_empty_tracker_is_refused() {
    let mut session = session(EntryStore::new());
    run_lines(&mut session, &["login worb", "export"]);
    assert!(output(session).contains("No data to export"));
}

#[test]
fn quick_filter_opens_matching_bins() {
    let mut session = session(EntryStore::demo());
    run_lines(&mut session, &["login worb", "quick taylor", "quick zzz"]);
    let text = output(session);
    assert!(text.contains("Opened: Taylor Brooks"));
    assert!(text.contains("No athletes match 'zzz'"));
}

#[test]
fn run_stops_at_quit() {
    let mut session = session(EntryStore::demo());
    let input = Cursor::new("login worb\nquit\nstats\n");
    session.run(input).unwrap();
    assert!(!output(session).contains("Total videos"));
}

fn add_clip(athlete: &str, date: &str, title: &str) -> String {
    format!(
        "add --athlete \"{athlete}\" --shooter Liam --editor \"Ava Wilson\" \
         --date {date} --title \"{title}\""
    )
}

#[test]
fn athlete_bin_lists_newest_first() {
    let mut session = session(EntryStore::new());
    let older = add_clip("Sam Parker", "2024-01-01", "Older");
    let newer = add_clip("Sam Parker", "2024-06-01", "Newer");
    let undated = add_clip("Sam Parker", "someday", "Undated");
    run_lines(
        &mut session,
        &[
            "login worb",
            undated.as_str(),
            older.as_str(),
            newer.as_str(),
            "toggle athlete \"Sam Parker\"",
            "bins athlete",
        ],
    );
    let text = output(session);

    let newer = text.find("Newer").unwrap();
    let older = text.find("Older").unwrap();
    let undated = text.find("Undated").unwrap();
    assert!(newer < older);
    assert!(older < undated);
}

#[test]
fn full_bin_offers_show_more_until_expanded() {
    let mut session = session(EntryStore::new());
    let mut lines = vec!["login worb".to_string()];
    for day in 1..=7 {
        let date = format!("2024-03-{day:02}");
        lines.push(add_clip("Sam Parker", &date, &format!("Clip {day}")));
    }
    lines.push("toggle athlete \"Sam Parker\"".to_string());
    lines.push("bins athlete".to_string());
    lines.push("expand athlete \"Sam Parker\"".to_string());
    lines.push("bins athlete".to_string());
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    run_lines(&mut session, &lines);
    let text = output(session);

    assert!(text.contains("\u{25be} Sam Parker's Bin (7 videos)"));
    assert_eq!(text.matches("Show More (2 more videos)").count(), 1);
    assert!(text.contains("Sam Parker expanded"));
    // The expanded listing shows the two oldest clips as well.
    assert_eq!(text.matches("Clip 1 ").count(), 1);
    assert_eq!(text.matches("Clip 7 ").count(), 2);
}

#[test]
fn link_can_be_cleared() {
    let mut session = session(EntryStore::demo());
    run_lines(&mut session, &["login worb", "link 1 \"\""]);

    let entry = session.workspace().store.get(&EntryId::new("1")).unwrap();
    assert_eq!(entry.link_url, "");
    assert!(output(session).contains("Link cleared for 1"));
}

#[test]
fn edit_can_clear_description() {
    let mut session = session(EntryStore::demo());
    run_lines(
        &mut session,
        &["login worb", "edit 3", "set --description \"\"", "save"],
    );

    let entry = session.workspace().store.get(&EntryId::new("3")).unwrap();
    assert_eq!(entry.description, "");
    assert_eq!(entry.title, "Competition Run 1");
}

#[test]
fn failed_login_keeps_session_open() {
    let mut session = session(EntryStore::demo());
    run_lines(&mut session, &["login worb", "login typo", "stats"]);
    let text = output(session);
    assert!(text.contains("Invalid password. Please try again."));
    assert!(text.contains("Total videos: 10"));
}
