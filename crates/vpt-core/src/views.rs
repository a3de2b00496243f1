//! Derived views over a store snapshot.
//!
//! Every function here is pure: it borrows the current entries, never
//! mutates them, and is cheap enough to recompute on each read.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};

use vpt_model::{Entry, EntryField, GroupKey, Roster, TrackerError, compare_names};

/// Entries whose stringified `field` contains `needle`, ignoring case.
///
/// An empty needle matches everything.
pub fn filter_by_field<'a>(
    entries: &'a [Entry],
    field: EntryField,
    needle: &str,
) -> Vec<&'a Entry> {
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty() || entry.field_value(field).to_lowercase().contains(&needle)
        })
        .collect()
}

/// Entries sharing one grouping value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin<'a> {
    pub key: String,
    pub entries: Vec<&'a Entry>,
}

impl Bin<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups entries by `key`, bins ordered by first appearance.
///
/// Relative store order is preserved inside each bin.
pub fn group_by(entries: &[Entry], key: GroupKey) -> Vec<Bin<'_>> {
    let mut bins: Vec<Bin<'_>> = Vec::new();
    for entry in entries {
        let value = key.key_of(entry);
        match bins.iter_mut().find(|bin| bin.key == value) {
            Some(bin) => bin.entries.push(entry),
            None => bins.push(Bin {
                key: value.to_string(),
                entries: vec![entry],
            }),
        }
    }
    bins
}

/// One bin per roster member, in roster order, empty bins included.
///
/// Entries naming someone off the roster appear in no bin.
pub fn group_by_roster<'a>(
    entries: &'a [Entry],
    key: GroupKey,
    members: &[String],
) -> Vec<Bin<'a>> {
    members
        .iter()
        .map(|member| Bin {
            key: member.clone(),
            entries: entries
                .iter()
                .filter(|entry| key.key_of(entry) == member.as_str())
                .collect(),
        })
        .collect()
}

/// Entry count per roster member, in roster order.
pub fn workload_counts(
    entries: &[Entry],
    key: GroupKey,
    members: &[String],
) -> Vec<(String, usize)> {
    members
        .iter()
        .map(|member| {
            let count = entries
                .iter()
                .filter(|entry| key.key_of(entry) == member.as_str())
                .count();
            (member.clone(), count)
        })
        .collect()
}

/// Roster athletes with no entries at all, in roster order.
pub fn no_content(entries: &[Entry], roster: &Roster) -> Vec<String> {
    roster
        .athletes
        .iter()
        .filter(|athlete| !entries.iter().any(|entry| &entry.athlete == *athlete))
        .cloned()
        .collect()
}

/// Roster athletes whose name contains `needle`, ignoring case.
///
/// Drives the quick filter that auto-opens matching athlete bins. An empty
/// needle matches nobody.
pub fn quick_filter_matches(roster: &Roster, needle: &str) -> Vec<String> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    roster
        .athletes
        .iter()
        .filter(|athlete| athlete.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ============================================================================
// Athlete aggregation
// ============================================================================

/// Per-athlete video roll-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteSummary<'a> {
    pub name: String,
    /// Entries for this athlete in store order.
    pub videos: Vec<&'a Entry>,
}

impl<'a> AthleteSummary<'a> {
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Videos most recent first, undated ones last.
    pub fn videos_by_date(&self) -> Vec<&'a Entry> {
        let mut videos = self.videos.clone();
        sort_by_date_desc(&mut videos);
        videos
    }
}

/// Athlete list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AthleteSort {
    #[default]
    Name,
    VideosDesc,
    VideosAsc,
}

impl FromStr for AthleteSort {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(AthleteSort::Name),
            "videos-desc" => Ok(AthleteSort::VideosDesc),
            "videos-asc" => Ok(AthleteSort::VideosAsc),
            _ => Err(TrackerError::UnknownField(s.to_string())),
        }
    }
}

/// Search, "content needed" filter and ordering for the athlete list.
#[derive(Debug, Clone, Default)]
pub struct AthleteQuery {
    pub search: String,
    /// Keep only athletes with at most one video.
    pub only_needing_content: bool,
    pub sort: AthleteSort,
}

/// Builds one summary per roster athlete, in roster order.
pub fn athlete_summaries<'a>(entries: &'a [Entry], roster: &Roster) -> Vec<AthleteSummary<'a>> {
    group_by_roster(entries, GroupKey::Athlete, &roster.athletes)
        .into_iter()
        .map(|bin| AthleteSummary {
            name: bin.key,
            videos: bin.entries,
        })
        .collect()
}

impl AthleteQuery {
    /// Filters and orders summaries for display.
    pub fn apply<'a>(&self, summaries: Vec<AthleteSummary<'a>>) -> Vec<AthleteSummary<'a>> {
        let search = self.search.trim().to_lowercase();
        let mut filtered: Vec<AthleteSummary<'a>> = summaries
            .into_iter()
            .filter(|summary| search.is_empty() || summary.name.to_lowercase().contains(&search))
            .filter(|summary| !self.only_needing_content || summary.video_count() <= 1)
            .collect();

        match self.sort {
            AthleteSort::Name => filtered.sort_by(|a, b| compare_names(&a.name, &b.name)),
            AthleteSort::VideosDesc => filtered.sort_by(|a, b| {
                b.video_count()
                    .cmp(&a.video_count())
                    .then_with(|| compare_names(&a.name, &b.name))
            }),
            AthleteSort::VideosAsc => filtered.sort_by(|a, b| {
                a.video_count()
                    .cmp(&b.video_count())
                    .then_with(|| compare_names(&a.name, &b.name))
            }),
        }
        filtered
    }
}

// ============================================================================
// Date ordering
// ============================================================================

/// Parses an entry date as `YYYY-MM-DD`, falling back to RFC 3339.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Most recent first. Unparseable dates go last, keeping their order.
pub fn sort_by_date_desc(entries: &mut [&Entry]) {
    entries.sort_by(|a, b| match (parse_entry_date(&a.date), parse_entry_date(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
