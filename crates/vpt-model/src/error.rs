//! Error taxonomy shared by every tracker crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::entry::EntryId;

/// A single problem found while validating a submission or patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name as shown on the entry form.
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// Required value missing or blank.
    Missing,
    /// Value is not a member of the corresponding roster.
    NotInRoster(String),
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::NotInRoster(value) => {
                write!(f, "{} '{}' is not on the roster", self.field, value)
            }
        }
    }
}

/// Blocking validation failure: the operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn missing(&mut self, field: &'static str) {
        self.issues.push(FieldIssue {
            field,
            problem: FieldProblem::Missing,
        });
    }

    pub fn not_in_roster(&mut self, field: &'static str, value: &str) {
        self.issues.push(FieldIssue {
            field,
            problem: FieldProblem::NotInRoster(value.to_string()),
        });
    }

    /// Names of the fields reported as missing, in report order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.issues
            .iter()
            .filter(|issue| issue.problem == FieldProblem::Missing)
            .map(|issue| issue.field)
            .collect()
    }

    /// Converts into `Err` when any issue was recorded.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(TrackerError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    /// Required field missing or invalid; the operation was refused.
    #[error("Please fill in all required fields: {0}")]
    Validation(ValidationError),

    /// Update or delete target is not in the store.
    #[error("entry not found: {id}")]
    NotFound { id: EntryId },

    /// A store or session operation failed; state was left unchanged.
    #[error("{action} failed: {message}")]
    Operation {
        action: &'static str,
        message: String,
    },

    /// Export was requested for an empty store.
    #[error("No data to export")]
    NothingToExport,

    /// Filter requested on a field the entry does not have.
    #[error("unknown entry field: {0}")]
    UnknownField(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("csv error: {0}")]
    Csv(String),
}

impl TrackerError {
    pub fn operation(action: &'static str, message: impl Into<String>) -> Self {
        Self::Operation {
            action,
            message: message.into(),
        }
    }

    /// NotFound is reported but never fatal; callers may treat it as a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ValidationError> for TrackerError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
