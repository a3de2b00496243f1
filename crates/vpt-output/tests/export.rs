//! Integration tests for CSV export and import.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use vpt_core::EntryStore;
use vpt_model::{Entry, EntryId, Status, TrackerError};
use vpt_output::{export_csv, import_csv, write_export};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "vpt-output-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn quoted_entry() -> Entry {
    Entry {
        id: EntryId::new("1"),
        date: "2024-03-15".to_string(),
        athlete: "Alex Thompson".to_string(),
        title: "Park Run".to_string(),
        shooter: "Liam".to_string(),
        editor: "Marcus Chen".to_string(),
        description: "Called it \"the line of the year\"".to_string(),
        status: Status::Published,
        link_url: String::new(),
        created_at: "2024-03-15T10:00:00Z".to_string(),
    }
}

#[test]
fn export_quotes_fields_and_doubles_quotes() {
    let csv = export_csv(&[quoted_entry()]).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r#"
    Date,Athlete,Video Title,Shooter,Editor,Content Description,Status,Video Link
    "2024-03-15","Alex Thompson","Park Run","Liam","Marcus Chen","Called it ""the line of the year""","Published",""
    "#);
}

#[test]
fn export_with_no_entries_is_refused() {
    let store = EntryStore::new();
    let err = export_csv(store.entries()).unwrap_err();
    assert!(matches!(err, TrackerError::NothingToExport));
}

#[test]
fn export_keeps_store_order() {
    let store = EntryStore::demo();
    let csv = export_csv(store.entries()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 11);
    assert!(lines[1].contains("\"Alex Thompson\""));
    assert!(lines[10].contains("\"Drew Anderson\""));
}

#[test]
fn exported_file_reads_back() {
    let store = EntryStore::demo();
    let dir = unique_temp_dir("roundtrip");
    let day = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();

    let path = write_export(store.entries(), &dir, day).unwrap();
    assert!(path.ends_with("video_production_tracker_2024-03-16.csv"));

    let drafts = import_csv(fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(drafts.len(), store.len());
    assert_eq!(drafts[1].athlete, "Jordan Lee");
    assert_eq!(drafts[1].status, Status::InProgress);
    assert_eq!(drafts[1].link_url, "");
    assert_eq!(drafts[0].description, store.entries()[0].description);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn import_rejects_missing_columns() {
    let data = "Date,Athlete\n2024-01-01,Amy\n";
    let err = import_csv(data.as_bytes()).unwrap_err();
    assert!(matches!(err, TrackerError::Csv(_)));
}
