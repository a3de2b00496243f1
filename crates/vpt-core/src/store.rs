//! In-memory entry store.
//!
//! The store is the single source of truth for entries. It keeps append
//! order; every view decides its own display order. Mutations either
//! succeed completely or leave the store exactly as it was.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, warn};

use vpt_model::{
    Entry, EntryDraft, EntryId, EntryPatch, EntrySubmission, Result, Roster, TrackerError,
};

/// Ordered collection of entries with store-assigned identity.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with existing entries, rejecting duplicate ids.
    pub fn with_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(TrackerError::operation(
                    "load entries",
                    format!("duplicate entry id {}", entry.id),
                ));
            }
        }
        let next_seq = entries
            .iter()
            .filter_map(|entry| sequence_of(&entry.id))
            .max()
            .unwrap_or(0);
        debug!(count = entries.len(), next_seq, "seeded entry store");
        Ok(Self { entries, next_seq })
    }

    /// Current collection in append order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends drafts, assigning each a fresh id and a shared creation time.
    pub fn add(&mut self, drafts: Vec<EntryDraft>) -> Result<Vec<EntryId>> {
        self.add_at(drafts, Utc::now())
    }

    /// Same as [`EntryStore::add`] with an explicit creation instant.
    pub fn add_at(&mut self, drafts: Vec<EntryDraft>, now: DateTime<Utc>) -> Result<Vec<EntryId>> {
        let created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = self.fresh_id();
            debug!(id = %id, athlete = %draft.athlete, "added entry");
            self.entries
                .push(Entry::from_draft(id.clone(), created_at.clone(), draft));
            ids.push(id);
        }
        Ok(ids)
    }

    /// Validates the add form and appends one entry per selected athlete.
    pub fn submit(
        &mut self,
        submission: &EntrySubmission,
        roster: &Roster,
    ) -> Result<Vec<EntryId>> {
        if let Err(error) = submission.validate(roster) {
            warn!(%error, "submission refused");
            return Err(error);
        }
        self.add(submission.drafts())
    }

    /// Merges `patch` into the entry with `id` and returns the result.
    ///
    /// An empty patch leaves the entry unchanged and still succeeds.
    pub fn update(&mut self, id: &EntryId, patch: &EntryPatch, roster: &Roster) -> Result<&Entry> {
        let Some(index) = self.position(id) else {
            warn!(id = %id, "update target not found");
            return Err(TrackerError::NotFound { id: id.clone() });
        };
        if let Err(error) = patch.validate(roster) {
            warn!(id = %id, %error, "update refused");
            return Err(error);
        }
        let entry = &mut self.entries[index];
        patch.apply_to(entry);
        debug!(id = %id, "updated entry");
        Ok(entry)
    }

    /// Replaces only the video link.
    pub fn update_link(&mut self, id: &EntryId, url: &str, roster: &Roster) -> Result<&Entry> {
        self.update(id, &EntryPatch::link(url.trim()), roster)
    }

    /// Deletes the entry with `id`. Deleting a missing id changes nothing.
    pub fn remove(&mut self, id: &EntryId) -> Result<Entry> {
        match self.position(id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(id = %id, "removed entry");
                Ok(removed)
            }
            None => {
                debug!(id = %id, "remove target not found");
                Err(TrackerError::NotFound { id: id.clone() })
            }
        }
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    /// Next sequence id not currently in use. Ids of removed entries are
    /// never handed out again because the sequence only moves forward.
    fn fresh_id(&mut self) -> EntryId {
        loop {
            self.next_seq += 1;
            let candidate = EntryId::new(format!("v{:06}", self.next_seq));
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// Sequence number of a store-assigned id such as `v000042`.
fn sequence_of(id: &EntryId) -> Option<u64> {
    let digits = id.as_str().strip_prefix('v')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
