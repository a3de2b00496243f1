pub mod entry;
pub mod error;
pub mod patch;
pub mod roster;
pub mod status;

pub use entry::{Entry, EntryDraft, EntryField, EntryId};
pub use error::{FieldIssue, FieldProblem, Result, TrackerError, ValidationError};
pub use patch::{EntryPatch, EntrySubmission};
pub use roster::{GroupKey, Roster, compare_names};
pub use status::Status;
