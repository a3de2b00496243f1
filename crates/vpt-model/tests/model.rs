//! Integration tests for roster loading and entry serialization.

use std::fs;
use std::path::PathBuf;

use vpt_model::{Entry, EntryId, EntryPatch, GroupKey, Roster, Status, TrackerError};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "vpt-model-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn roster_loads_from_json_file() {
    let dir = unique_temp_dir("roster");
    let path = dir.join("roster.json");
    fs::write(
        &path,
        r#"{"athletes": ["Zoe", "amy"], "editors": ["Ed"], "shooters": ["Sam"]}"#,
    )
    .unwrap();

    let roster = Roster::from_json_path(&path).unwrap();
    assert_eq!(roster.members(GroupKey::Editor), ["Ed".to_string()]);
    assert!(roster.contains(GroupKey::Shooter, "Sam"));
    assert!(!roster.contains(GroupKey::Shooter, "sam"));
    assert_eq!(roster.sorted_athletes(), vec!["amy".to_string(), "Zoe".to_string()]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_roster_names_the_file() {
    let dir = unique_temp_dir("bad-roster");
    let path = dir.join("roster.json");
    fs::write(&path, r#"{"athletes": ["Zoe"]}"#).unwrap();

    let error = Roster::from_json_path(&path).unwrap_err();
    assert!(matches!(error, TrackerError::Json { .. }));
    assert!(error.to_string().contains("roster.json"));

    let missing = Roster::from_json_path(&dir.join("absent.json")).unwrap_err();
    assert!(matches!(missing, TrackerError::Io(_)));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn entry_serializes_with_snake_case_fields() {
    let entry = Entry {
        id: EntryId::new("v000001"),
        date: "2024-03-15".to_string(),
        athlete: "Zoe".to_string(),
        title: "Clip".to_string(),
        shooter: "Liam".to_string(),
        editor: "Marcus Chen".to_string(),
        description: String::new(),
        status: Status::InProgress,
        link_url: String::new(),
        created_at: "2024-03-15T10:00:00.000Z".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "v000001");
    assert_eq!(json["status"], "In Progress");
    assert_eq!(json["link_url"], "");

    let back: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}

#[test]
fn patch_omits_absent_fields() {
    let patch = EntryPatch::link("https://example.com/v");
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"link_url":"https://example.com/v"}"#);
}
