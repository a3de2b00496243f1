//! CLI argument definitions for the video production tracker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vpt_core::AthleteSort;
use vpt_model::{EntryField, GroupKey, Status};

#[derive(Parser)]
#[command(
    name = "vpt",
    version,
    about = "Video production tracker - record, group and export athlete video entries",
    long_about = "Track videos produced for athletes across shooters and editors.\n\n\
                  One-shot subcommands report on the loaded entries; `session` opens an\n\
                  interactive dashboard where entries can be added, edited and deleted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub data: DataArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where the roster and starting entries come from.
#[derive(Args, Clone, Default)]
pub struct DataArgs {
    /// JSON roster file (falls back to $VPT_ROSTER, then the built-in roster).
    #[arg(long = "roster", value_name = "PATH", global = true)]
    pub roster: Option<PathBuf>,

    /// Seed entries from a previously exported CSV file.
    #[arg(long = "data", value_name = "PATH", global = true, conflicts_with = "empty")]
    pub data: Option<PathBuf>,

    /// Start with no entries instead of the demonstration set.
    #[arg(long = "empty", global = true)]
    pub empty: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List entries, optionally filtered by a field.
    List(ListArgs),

    /// Show entries grouped into editor, shooter or athlete bins.
    Bins(BinsArgs),

    /// Per-athlete video counts.
    Athletes(AthleteArgs),

    /// Dashboard statistics.
    Stats,

    /// Export all entries to CSV.
    Export(ExportArgs),

    /// Interactive dashboard session reading commands from stdin.
    Session,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Field to filter on.
    #[arg(long = "field", default_value = "athlete", value_parser = parse_field)]
    pub field: EntryField,

    /// Case-insensitive substring to look for.
    #[arg(long = "search", default_value = "")]
    pub search: String,
}

#[derive(Args, Clone)]
pub struct BinsArgs {
    /// Attribute to group by.
    #[arg(value_enum)]
    pub group: GroupArg,

    /// Show every entry instead of the first few per bin.
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct AthleteArgs {
    /// Sort order.
    #[arg(long = "sort", value_enum, default_value = "name")]
    pub sort: AthleteSortArg,

    /// Only athletes whose name contains this text.
    #[arg(long = "search", default_value = "")]
    pub search: String,

    /// Only athletes with at most one video.
    #[arg(long = "needed")]
    pub needed: bool,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Directory the CSV file is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GroupArg {
    Editor,
    Shooter,
    Athlete,
}

impl From<GroupArg> for GroupKey {
    fn from(value: GroupArg) -> Self {
        match value {
            GroupArg::Editor => GroupKey::Editor,
            GroupArg::Shooter => GroupKey::Shooter,
            GroupArg::Athlete => GroupKey::Athlete,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AthleteSortArg {
    Name,
    VideosDesc,
    VideosAsc,
}

impl From<AthleteSortArg> for AthleteSort {
    fn from(value: AthleteSortArg) -> Self {
        match value {
            AthleteSortArg::Name => AthleteSort::Name,
            AthleteSortArg::VideosDesc => AthleteSort::VideosDesc,
            AthleteSortArg::VideosAsc => AthleteSort::VideosAsc,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_field(value: &str) -> Result<EntryField, String> {
    value.parse().map_err(|error: vpt_model::TrackerError| error.to_string())
}

fn parse_status(value: &str) -> Result<Status, String> {
    value.parse().map_err(|error: vpt_model::TrackerError| error.to_string())
}

// ============================================================================
// Session commands
// ============================================================================

/// One line typed into an interactive session.
#[derive(Parser)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Unlock the dashboard.
    Login { password: String },

    /// Lock the dashboard again.
    Logout,

    /// Add one entry per athlete.
    Add(AddArgs),

    /// List entries, optionally filtered by a field.
    List(ListArgs),

    /// Show bins for an attribute.
    Bins(BinsArgs),

    /// Open or close a bin (or all bins of a group).
    Toggle(ToggleArgs),

    /// Show or hide the remaining entries of a bin.
    Expand { group: GroupArg, key: String },

    /// Open every athlete bin whose name contains the text.
    Quick { needle: String },

    /// Per-athlete video counts.
    Athletes(AthleteArgs),

    /// Dashboard statistics.
    Stats,

    /// Export all entries to CSV.
    Export(ExportArgs),

    /// Open the detail view of an entry.
    View { id: String },

    /// Open the editor for an entry.
    Edit { id: String },

    /// Change fields of the entry being edited.
    Set(SetArgs),

    /// Save the entry being edited.
    Save,

    /// Discard the edit in progress.
    Cancel,

    /// Close the detail view.
    Close,

    /// Replace the video link of an entry.
    Link { id: String, url: String },

    /// Delete an entry (requires --yes).
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long = "yes")]
        yes: bool,
    },

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Clone)]
pub struct AddArgs {
    /// Athlete name; repeat for several athletes.
    #[arg(long = "athlete")]
    pub athletes: Vec<String>,
    #[arg(long = "shooter", default_value = "")]
    pub shooter: String,
    #[arg(long = "editor", default_value = "")]
    pub editor: String,
    #[arg(long = "date", default_value = "")]
    pub date: String,
    #[arg(long = "title", default_value = "")]
    pub title: String,
    #[arg(long = "description", default_value = "")]
    pub description: String,
    #[arg(long = "status", default_value = "completed", value_parser = parse_status)]
    pub status: Status,
    #[arg(long = "link", default_value = "")]
    pub link: String,
}

#[derive(Args, Clone)]
pub struct ToggleArgs {
    #[arg(value_enum)]
    pub group: GroupArg,
    /// Bin to toggle.
    pub key: Option<String>,
    /// Open every bin of the group.
    #[arg(long = "all", conflicts_with_all = ["key", "none"])]
    pub all: bool,
    /// Close every bin of the group.
    #[arg(long = "none", conflicts_with = "key")]
    pub none: bool,
}

#[derive(Args, Clone, Default)]
pub struct SetArgs {
    #[arg(long = "date")]
    pub date: Option<String>,
    #[arg(long = "athlete")]
    pub athlete: Option<String>,
    #[arg(long = "title")]
    pub title: Option<String>,
    #[arg(long = "shooter")]
    pub shooter: Option<String>,
    #[arg(long = "editor")]
    pub editor: Option<String>,
    #[arg(long = "description")]
    pub description: Option<String>,
    #[arg(long = "status", value_parser = parse_status)]
    pub status: Option<Status>,
    #[arg(long = "link")]
    pub link: Option<String>,
}
