//! Production status of a video entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Where a video sits in the production pipeline.
///
/// Serialized with the same labels the entry form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Status {
    /// Shot but still being edited.
    #[serde(rename = "In Progress")]
    InProgress,

    /// Edit finished, not yet public.
    #[default]
    Completed,

    /// Live on a public channel.
    Published,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::InProgress, Status::Completed, Status::Published];

    /// Returns the label as it appears on the form and in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Published => "Published",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    /// Case-insensitive; accepts space, dash or underscore separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "INPROGRESS" => Ok(Status::InProgress),
            "COMPLETED" => Ok(Status::Completed),
            "PUBLISHED" => Ok(Status::Published),
            _ => Err(TrackerError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("PUBLISHED".parse::<Status>().unwrap(), Status::Published);
        assert!("Draft".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_default_is_completed() {
        assert_eq!(Status::default(), Status::Completed);
    }

    #[test]
    fn test_status_serializes_with_form_label() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
