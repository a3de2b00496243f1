//! Roster and seed-data resolution from CLI flags and the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use vpt_core::{EntryStore, SessionGate};
use vpt_model::{GroupKey, Roster};
use vpt_output::import_path;

use crate::cli::DataArgs;

/// Environment variable pointing at a JSON roster file.
pub const ROSTER_ENV_VAR: &str = "VPT_ROSTER";

/// Everything a command needs: the loaded entries and the roster.
#[derive(Debug)]
pub struct Workspace {
    pub store: EntryStore,
    pub roster: Roster,
}

impl Workspace {
    pub fn new(store: EntryStore, roster: Roster) -> Self {
        Self { store, roster }
    }

    /// Resolves roster and entries from flags, then the environment, then
    /// the built-in defaults.
    pub fn load(args: &DataArgs) -> Result<Self> {
        let roster = load_roster(args)?;
        let store = load_store(args)?;
        report_off_roster(&store, &roster);
        Ok(Self { store, roster })
    }
}

fn roster_path(args: &DataArgs) -> Option<PathBuf> {
    args.roster
        .clone()
        .or_else(|| std::env::var_os(ROSTER_ENV_VAR).map(PathBuf::from))
}

fn load_roster(args: &DataArgs) -> Result<Roster> {
    match roster_path(args) {
        Some(path) => {
            let roster = Roster::from_json_path(&path)
                .with_context(|| format!("load roster: {}", path.display()))?;
            info!(path = %path.display(), athletes = roster.athletes.len(), "loaded roster");
            Ok(roster)
        }
        None => Ok(Roster::default()),
    }
}

fn load_store(args: &DataArgs) -> Result<EntryStore> {
    if args.empty {
        return Ok(EntryStore::new());
    }
    let Some(path) = &args.data else {
        return Ok(EntryStore::demo());
    };
    let drafts = import_path(path).with_context(|| format!("read entries: {}", path.display()))?;
    let mut store = EntryStore::new();
    store.add(drafts).context("seed entries")?;
    info!(path = %path.display(), entries = store.len(), "loaded entries");
    Ok(store)
}

/// Seed data is not validated against the roster; say so when it differs.
fn report_off_roster(store: &EntryStore, roster: &Roster) {
    for key in [GroupKey::Athlete, GroupKey::Shooter, GroupKey::Editor] {
        let off_roster = store
            .entries()
            .iter()
            .filter(|entry| !roster.contains(key, key.key_of(entry)))
            .count();
        if off_roster > 0 {
            warn!(%key, entries = off_roster, "entries name someone not on the roster");
        }
    }
}

/// Session gate honouring the password override.
pub fn session_gate() -> SessionGate {
    SessionGate::from_env()
}
