//! CSV output for the video production tracker.

pub mod export;
pub mod import;

pub use export::{EXPORT_HEADERS, export_csv, export_file_name, write_export};
pub use import::{import_csv, import_path};
