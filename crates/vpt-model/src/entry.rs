//! Video production entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;
use crate::status::Status;

/// Opaque entry identifier, unique within a store for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One produced video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Calendar date of the shoot, normally `YYYY-MM-DD`.
    pub date: String,
    pub athlete: String,
    pub title: String,
    pub shooter: String,
    pub editor: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub link_url: String,
    /// RFC 3339 timestamp set once by the store.
    pub created_at: String,
}

impl Entry {
    /// Builds an entry from a draft once the store has assigned identity.
    pub fn from_draft(id: EntryId, created_at: String, draft: EntryDraft) -> Self {
        Self {
            id,
            date: draft.date,
            athlete: draft.athlete,
            title: draft.title,
            shooter: draft.shooter,
            editor: draft.editor,
            description: draft.description,
            status: draft.status,
            link_url: draft.link_url,
            created_at,
        }
    }

    /// Stringified value of a field, as used by text filters.
    pub fn field_value(&self, field: EntryField) -> &str {
        match field {
            EntryField::Id => self.id.as_str(),
            EntryField::Date => &self.date,
            EntryField::Athlete => &self.athlete,
            EntryField::Title => &self.title,
            EntryField::Shooter => &self.shooter,
            EntryField::Editor => &self.editor,
            EntryField::Description => &self.description,
            EntryField::Status => self.status.as_str(),
            EntryField::LinkUrl => &self.link_url,
            EntryField::CreatedAt => &self.created_at,
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link_url.trim().is_empty()
    }
}

/// Entry content before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    pub date: String,
    pub athlete: String,
    pub title: String,
    pub shooter: String,
    pub editor: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub link_url: String,
}

/// Addressable entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Id,
    Date,
    Athlete,
    Title,
    Shooter,
    Editor,
    Description,
    Status,
    LinkUrl,
    CreatedAt,
}

impl EntryField {
    pub const ALL: [EntryField; 10] = [
        EntryField::Id,
        EntryField::Date,
        EntryField::Athlete,
        EntryField::Title,
        EntryField::Shooter,
        EntryField::Editor,
        EntryField::Description,
        EntryField::Status,
        EntryField::LinkUrl,
        EntryField::CreatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Id => "id",
            EntryField::Date => "date",
            EntryField::Athlete => "athlete",
            EntryField::Title => "title",
            EntryField::Shooter => "shooter",
            EntryField::Editor => "editor",
            EntryField::Description => "description",
            EntryField::Status => "status",
            EntryField::LinkUrl => "link_url",
            EntryField::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        EntryField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| TrackerError::UnknownField(s.to_string()))
    }
}
