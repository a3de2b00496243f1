//! Reading an export back into entry drafts.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use vpt_model::{EntryDraft, Result, Status, TrackerError};

use crate::export::{EXPORT_HEADERS, csv_error};

/// Columns an import cannot do without.
const REQUIRED_HEADERS: [&str; 6] = [
    "Date",
    "Athlete",
    "Video Title",
    "Shooter",
    "Editor",
    "Status",
];

/// Parses CSV in the export format. Header names match case-insensitively
/// and column order is free.
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<EntryDraft>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim_matches('\u{feff}').to_lowercase(), idx))
        .collect();

    for required in REQUIRED_HEADERS {
        if !columns.contains_key(&required.to_lowercase()) {
            return Err(TrackerError::Csv(format!("missing column '{required}'")));
        }
    }

    let column = |record: &csv::StringRecord, name: &str| -> String {
        columns
            .get(&name.to_lowercase())
            .and_then(|idx| record.get(*idx))
            .unwrap_or("")
            .to_string()
    };

    let mut drafts = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let status: Status = column(&record, "Status").parse().map_err(|_| {
            TrackerError::Csv(format!(
                "record {}: invalid status '{}'",
                line + 1,
                column(&record, "Status")
            ))
        })?;
        drafts.push(EntryDraft {
            date: column(&record, EXPORT_HEADERS[0]),
            athlete: column(&record, EXPORT_HEADERS[1]),
            title: column(&record, EXPORT_HEADERS[2]),
            shooter: column(&record, EXPORT_HEADERS[3]),
            editor: column(&record, EXPORT_HEADERS[4]),
            description: column(&record, EXPORT_HEADERS[5]),
            status,
            link_url: column(&record, EXPORT_HEADERS[7]),
        });
    }
    debug!(records = drafts.len(), "imported entries");
    Ok(drafts)
}

/// Imports from a file on disk.
pub fn import_path(path: &Path) -> Result<Vec<EntryDraft>> {
    let file = File::open(path)?;
    import_csv(file)
}
