//! CSV export of the full entry collection.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use vpt_model::{Entry, Result, TrackerError};

/// Column headers, in export order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Date",
    "Athlete",
    "Video Title",
    "Shooter",
    "Editor",
    "Content Description",
    "Status",
    "Video Link",
];

/// Serializes entries in store order.
///
/// The header line is written bare; every field of every record is quoted
/// with embedded quotes doubled. An empty collection is refused.
pub fn export_csv(entries: &[Entry]) -> Result<String> {
    if entries.is_empty() {
        return Err(TrackerError::NothingToExport);
    }

    let mut buffer = Vec::new();
    {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        header.write_record(EXPORT_HEADERS).map_err(csv_error)?;
        header.flush()?;
    }
    {
        let mut rows = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buffer);
        for entry in entries {
            rows.write_record(export_record(entry)).map_err(csv_error)?;
        }
        rows.flush()?;
    }

    String::from_utf8(buffer).map_err(|error| TrackerError::Csv(error.to_string()))
}

fn export_record(entry: &Entry) -> [&str; 8] {
    [
        &entry.date,
        &entry.athlete,
        &entry.title,
        &entry.shooter,
        &entry.editor,
        &entry.description,
        entry.status.as_str(),
        &entry.link_url,
    ]
}

/// Download name for an export made on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("video_production_tracker_{}.csv", today.format("%Y-%m-%d"))
}

/// Writes the export into `dir` and returns the file path.
pub fn write_export(entries: &[Entry], dir: &Path, today: NaiveDate) -> Result<PathBuf> {
    let contents = export_csv(entries)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));
    fs::write(&path, contents)?;
    info!(path = %path.display(), entries = entries.len(), "exported entries");
    Ok(path)
}

pub(crate) fn csv_error(error: csv::Error) -> TrackerError {
    TrackerError::Csv(error.to_string())
}
