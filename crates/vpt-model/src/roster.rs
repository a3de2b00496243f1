//! Fixed people rosters: athletes, editors and shooters.
//!
//! The roster is supplied from outside the entry store and is read-only to
//! the tracker. Athlete aggregation and workload counts are computed against
//! it, so entries naming someone off-roster are left out of those views.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{Result, TrackerError};

/// Attribute entries are grouped by in bin views and workload counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Athlete,
    Shooter,
    Editor,
}

impl GroupKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Athlete => "athlete",
            GroupKey::Shooter => "shooter",
            GroupKey::Editor => "editor",
        }
    }

    /// Extracts the grouping value from an entry.
    pub fn key_of<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            GroupKey::Athlete => &entry.athlete,
            GroupKey::Shooter => &entry.shooter,
            GroupKey::Editor => &entry.editor,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GroupKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "athlete" | "athletes" => Ok(GroupKey::Athlete),
            "shooter" | "shooters" => Ok(GroupKey::Shooter),
            "editor" | "editors" => Ok(GroupKey::Editor),
            _ => Err(TrackerError::UnknownField(s.to_string())),
        }
    }
}

/// Ordered lists of the people the tracker knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub athletes: Vec<String>,
    pub editors: Vec<String>,
    pub shooters: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        let to_strings = |names: &[&str]| names.iter().map(|s| (*s).to_string()).collect();
        Self {
            athletes: to_strings(&[
                "Alex Thompson",
                "Jordan Lee",
                "Sam Parker",
                "Morgan Chen",
                "Chris Rodriguez",
                "Pat Johnson",
                "Jamie Wilson",
                "Casey Martinez",
                "Robin Zhang",
                "Drew Anderson",
                "Taylor Brooks",
                "Riley Evans",
            ]),
            editors: to_strings(&[
                "Marcus Chen",
                "Sophia Martinez",
                "Isabella Kim",
                "Oliver Wright",
                "Ava Wilson",
            ]),
            shooters: to_strings(&[
                "Liam",
                "Nathan Reed",
                "Ethan Brooks",
                "Lucas Taylor",
                "Multiple",
            ]),
        }
    }
}

impl Roster {
    /// Loads a roster from a JSON file with `athletes`, `editors` and
    /// `shooters` arrays.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| TrackerError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Members of the roster for a grouping attribute, in roster order.
    pub fn members(&self, key: GroupKey) -> &[String] {
        match key {
            GroupKey::Athlete => &self.athletes,
            GroupKey::Shooter => &self.shooters,
            GroupKey::Editor => &self.editors,
        }
    }

    pub fn contains(&self, key: GroupKey, name: &str) -> bool {
        self.members(key).iter().any(|member| member == name)
    }

    /// Athletes sorted for display, case-insensitively.
    pub fn sorted_athletes(&self) -> Vec<String> {
        let mut athletes = self.athletes.clone();
        athletes.sort_by(|a, b| compare_names(a, b));
        athletes
    }
}

/// Case-insensitive name ordering with an exact-match tie-break so the
/// result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
