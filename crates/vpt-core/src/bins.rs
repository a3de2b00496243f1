//! Collapsible bin state owned by the view layer.

use std::collections::HashMap;

use vpt_model::Entry;

/// Entries shown in a collapsed bin before "show more".
pub const INITIAL_BIN_ENTRIES: usize = 5;

/// Open/closed and expanded flags per bin key.
///
/// Missing keys read as closed and not expanded.
#[derive(Debug, Clone, Default)]
pub struct BinState {
    open: HashMap<String, bool>,
    expanded: HashMap<String, bool>,
}

/// What a bin renders right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleBin<'a> {
    pub entries: Vec<&'a Entry>,
    /// Entries hidden behind "show more".
    pub hidden: usize,
}

impl BinState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.get(key).copied().unwrap_or(false)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, key: &str) {
        let open = !self.is_open(key);
        self.open.insert(key.to_string(), open);
    }

    pub fn toggle_expanded(&mut self, key: &str) {
        let expanded = !self.is_expanded(key);
        self.expanded.insert(key.to_string(), expanded);
    }

    /// Opens or closes every listed bin.
    pub fn set_all<'k>(&mut self, keys: impl IntoIterator<Item = &'k String>, open: bool) {
        self.open = keys.into_iter().map(|key| (key.clone(), open)).collect();
    }

    /// Opens the given bins, leaving the others as they are.
    pub fn open_matching(&mut self, keys: &[String]) {
        for key in keys {
            self.open.insert(key.clone(), true);
        }
    }

    /// Entries to render for a bin, honouring its expanded flag.
    pub fn visible<'a>(&self, key: &str, entries: &[&'a Entry]) -> VisibleBin<'a> {
        if self.is_expanded(key) || entries.len() <= INITIAL_BIN_ENTRIES {
            VisibleBin {
                entries: entries.to_vec(),
                hidden: 0,
            }
        } else {
            VisibleBin {
                entries: entries[..INITIAL_BIN_ENTRIES].to_vec(),
                hidden: entries.len() - INITIAL_BIN_ENTRIES,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vpt_model::{EntryDraft, EntryId};

    fn entries(count: usize) -> Vec<Entry> {
        (1..=count)
            .map(|n| {
                let draft = EntryDraft {
                    athlete: "Sam Parker".into(),
                    title: format!("Clip {n}"),
                    ..EntryDraft::default()
                };
                Entry::from_draft(EntryId::new(n.to_string()), String::new(), draft)
            })
            .collect()
    }

    #[test]
    fn test_five_entries_show_without_more() {
        let owned = entries(5);
        let refs: Vec<&Entry> = owned.iter().collect();
        let visible = BinState::new().visible("Sam Parker", &refs);
        assert_eq!(visible.entries.len(), 5);
        assert_eq!(visible.hidden, 0);
    }

    #[test]
    fn test_sixth_entry_is_hidden_until_expanded() {
        let owned = entries(6);
        let refs: Vec<&Entry> = owned.iter().collect();
        let mut bins = BinState::new();

        let visible = bins.visible("Sam Parker", &refs);
        assert_eq!(visible.entries, refs[..INITIAL_BIN_ENTRIES].to_vec());
        assert_eq!(visible.hidden, 1);

        bins.toggle_expanded("Sam Parker");
        let visible = bins.visible("Sam Parker", &refs);
        assert_eq!(visible.entries.len(), 6);
        assert_eq!(visible.hidden, 0);

        // Expanding one bin leaves the others collapsed.
        assert_eq!(bins.visible("Zoe", &refs).hidden, 1);
    }

    #[test]
    fn test_open_matching_keeps_other_bins() {
        let mut bins = BinState::new();
        bins.toggle("Liam");
        bins.open_matching(&["Taylor Brooks".to_string()]);
        assert!(bins.is_open("Liam"));
        assert!(bins.is_open("Taylor Brooks"));
        assert!(!bins.is_open("Riley Evans"));
    }

    #[test]
    fn test_toggle_flips_open_flag() {
        let mut bins = BinState::new();
        assert!(!bins.is_open("Liam"));
        bins.toggle("Liam");
        assert!(bins.is_open("Liam"));
        bins.toggle("Liam");
        assert!(!bins.is_open("Liam"));
    }

    #[test]
    fn test_set_all_replaces_flags() {
        let keys = vec!["A".to_string(), "B".to_string()];
        let mut bins = BinState::new();
        bins.toggle("C");
        bins.set_all(&keys, true);
        assert!(bins.is_open("A") && bins.is_open("B"));
        assert!(!bins.is_open("C"));
    }
}
