//! Aggregate numbers for the dashboard header.

use vpt_model::{Entry, GroupKey, Roster, Status};

use crate::views::{no_content, workload_counts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_videos: usize,
    pub total_athletes: usize,
    pub athletes_with_content: usize,
    /// Roster athletes without a single video, in roster order.
    pub athletes_without_content: Vec<String>,
    pub editor_counts: Vec<(String, usize)>,
    pub shooter_counts: Vec<(String, usize)>,
    pub status_counts: Vec<(Status, usize)>,
}

impl DashboardStats {
    pub fn compute(entries: &[Entry], roster: &Roster) -> Self {
        let athletes_without_content = no_content(entries, roster);
        let status_counts = Status::ALL
            .into_iter()
            .map(|status| {
                let count = entries.iter().filter(|entry| entry.status == status).count();
                (status, count)
            })
            .collect();

        Self {
            total_videos: entries.len(),
            total_athletes: roster.athletes.len(),
            athletes_with_content: roster.athletes.len() - athletes_without_content.len(),
            athletes_without_content,
            editor_counts: workload_counts(entries, GroupKey::Editor, &roster.editors),
            shooter_counts: workload_counts(entries, GroupKey::Shooter, &roster.shooters),
            status_counts,
        }
    }

    pub fn status_count(&self, status: Status) -> usize {
        self.status_counts
            .iter()
            .find(|(candidate, _)| *candidate == status)
            .map_or(0, |(_, count)| *count)
    }
}
