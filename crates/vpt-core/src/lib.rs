//! Core tracker logic: the entry store and everything derived from it.

pub mod bins;
pub mod coordinator;
pub mod demo;
pub mod session;
pub mod stats;
pub mod store;
pub mod views;

pub use bins::{BinState, INITIAL_BIN_ENTRIES, VisibleBin};
pub use coordinator::{DialogCoordinator, DialogState};
pub use demo::demo_entries;
pub use session::{Action, Banner, SessionGate};
pub use stats::DashboardStats;
pub use store::EntryStore;
pub use views::{
    AthleteQuery, AthleteSort, AthleteSummary, Bin, athlete_summaries, filter_by_field, group_by,
    group_by_roster, no_content, quick_filter_matches, sort_by_date_desc, workload_counts,
};
