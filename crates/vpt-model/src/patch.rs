//! Form payloads: new-entry submissions and partial edits.

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryDraft};
use crate::error::{Result, ValidationError};
use crate::roster::{GroupKey, Roster};
use crate::status::Status;

/// Partial update for an entry. Absent fields are left untouched.
///
/// `id` and `created_at` are deliberately not patchable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shooter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl EntryPatch {
    /// Edit-form draft pre-filled with every editable field of `entry`.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            date: Some(entry.date.clone()),
            athlete: Some(entry.athlete.clone()),
            title: Some(entry.title.clone()),
            shooter: Some(entry.shooter.clone()),
            editor: Some(entry.editor.clone()),
            description: Some(entry.description.clone()),
            status: Some(entry.status),
            link_url: Some(entry.link_url.clone()),
        }
    }

    /// Patch touching only the video link.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks present fields against the entry schema.
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        let mut error = ValidationError::default();
        if let Some(date) = &self.date
            && date.trim().is_empty()
        {
            error.missing("date");
        }
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            error.missing("title");
        }
        check_member(&mut error, roster, GroupKey::Athlete, self.athlete.as_deref());
        check_member(&mut error, roster, GroupKey::Shooter, self.shooter.as_deref());
        check_member(&mut error, roster, GroupKey::Editor, self.editor.as_deref());
        error.into_result()
    }

    /// Merges present fields into `entry`.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(date) = &self.date {
            entry.date.clone_from(date);
        }
        if let Some(athlete) = &self.athlete {
            entry.athlete.clone_from(athlete);
        }
        if let Some(title) = &self.title {
            entry.title.clone_from(title);
        }
        if let Some(shooter) = &self.shooter {
            entry.shooter.clone_from(shooter);
        }
        if let Some(editor) = &self.editor {
            entry.editor.clone_from(editor);
        }
        if let Some(description) = &self.description {
            entry.description.clone_from(description);
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
        if let Some(link_url) = &self.link_url {
            entry.link_url.clone_from(link_url);
        }
    }
}

fn check_member(error: &mut ValidationError, roster: &Roster, key: GroupKey, value: Option<&str>) {
    match value {
        None => {}
        Some(name) if name.trim().is_empty() => error.missing(key.as_str()),
        Some(name) if !roster.contains(key, name) => error.not_in_roster(key.as_str(), name),
        Some(_) => {}
    }
}

/// The add-entry form. One entry is created per selected athlete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntrySubmission {
    pub athletes: Vec<String>,
    pub shooter: String,
    pub editor: String,
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub link_url: String,
}

impl EntrySubmission {
    /// Reports every missing required field at once, then roster problems.
    pub fn validate(&self, roster: &Roster) -> Result<()> {
        let mut error = ValidationError::default();
        if self.athletes.iter().all(|name| name.trim().is_empty()) {
            error.missing("athlete");
        }
        if self.shooter.trim().is_empty() {
            error.missing("shooter");
        }
        if self.editor.trim().is_empty() {
            error.missing("editor");
        }
        if self.date.trim().is_empty() {
            error.missing("date");
        }
        if self.title.trim().is_empty() {
            error.missing("title");
        }
        if !error.is_empty() {
            return error.into_result();
        }

        for athlete in self.athletes.iter().filter(|name| !name.trim().is_empty()) {
            if !roster.contains(GroupKey::Athlete, athlete) {
                error.not_in_roster("athlete", athlete);
            }
        }
        if !roster.contains(GroupKey::Shooter, &self.shooter) {
            error.not_in_roster("shooter", &self.shooter);
        }
        if !roster.contains(GroupKey::Editor, &self.editor) {
            error.not_in_roster("editor", &self.editor);
        }
        error.into_result()
    }

    /// Fans the submission out into one draft per distinct athlete.
    pub fn drafts(&self) -> Vec<EntryDraft> {
        let mut seen: Vec<&str> = Vec::new();
        for athlete in &self.athletes {
            let name = athlete.as_str();
            if !name.trim().is_empty() && !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen.into_iter()
            .map(|athlete| EntryDraft {
                date: self.date.clone(),
                athlete: athlete.to_string(),
                title: self.title.clone(),
                shooter: self.shooter.clone(),
                editor: self.editor.clone(),
                description: self.description.clone(),
                status: self.status,
                link_url: self.link_url.clone(),
            })
            .collect()
    }
}
