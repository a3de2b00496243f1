//! Report commands shared by one-shot invocations and sessions.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;

use vpt_core::views::group_by_roster;
use vpt_core::{
    AthleteQuery, BinState, DashboardStats, athlete_summaries, filter_by_field, sort_by_date_desc,
};
use vpt_model::GroupKey;
use vpt_output::write_export;

use crate::cli::{AthleteArgs, BinsArgs, ExportArgs, ListArgs};
use crate::config::Workspace;
use crate::render::{athletes_table, bins_text, entries_table, stats_text};

pub fn run_list(workspace: &Workspace, args: &ListArgs, out: &mut dyn Write) -> Result<()> {
    let entries = filter_by_field(workspace.store.entries(), args.field, &args.search);
    if entries.is_empty() {
        writeln!(out, "No entries found")?;
        return Ok(());
    }
    writeln!(out, "{}", entries_table(&entries))?;
    writeln!(out, "{} of {} entries", entries.len(), workspace.store.len())?;
    Ok(())
}

/// One-shot bins view: every bin open.
pub fn run_bins(workspace: &Workspace, args: &BinsArgs, out: &mut dyn Write) -> Result<()> {
    let group = GroupKey::from(args.group);
    let members = workspace.roster.members(group);
    let mut state = BinState::new();
    state.set_all(members, true);
    if args.all {
        for member in members {
            state.toggle_expanded(member);
        }
    }
    write_bins(workspace, group, &state, out)
}

pub fn write_bins(
    workspace: &Workspace,
    group: GroupKey,
    state: &BinState,
    out: &mut dyn Write,
) -> Result<()> {
    let members = match group {
        GroupKey::Athlete => workspace.roster.sorted_athletes(),
        _ => workspace.roster.members(group).to_vec(),
    };
    let mut bins = group_by_roster(workspace.store.entries(), group, &members);
    if group == GroupKey::Athlete {
        // Newest first, sorted before the "show more" cutoff.
        for bin in &mut bins {
            sort_by_date_desc(&mut bin.entries);
        }
    }
    write!(out, "{}", bins_text(group, &bins, state))?;
    Ok(())
}

pub fn run_athletes(workspace: &Workspace, args: &AthleteArgs, out: &mut dyn Write) -> Result<()> {
    let query = AthleteQuery {
        search: args.search.clone(),
        only_needing_content: args.needed,
        sort: args.sort.into(),
    };
    let summaries = query.apply(athlete_summaries(
        workspace.store.entries(),
        &workspace.roster,
    ));
    let found = match summaries.len() {
        0 => "No athletes found.".to_string(),
        1 => "1 athlete found.".to_string(),
        n => format!("{n} athletes found."),
    };
    if !summaries.is_empty() {
        writeln!(out, "{}", athletes_table(&summaries))?;
    }
    writeln!(out, "{found}")?;
    Ok(())
}

pub fn run_stats(workspace: &Workspace, out: &mut dyn Write) -> Result<()> {
    let stats = DashboardStats::compute(workspace.store.entries(), &workspace.roster);
    write!(out, "{}", stats_text(&stats))?;
    Ok(())
}

pub fn run_export(workspace: &Workspace, args: &ExportArgs, out: &mut dyn Write) -> Result<()> {
    let today = Local::now().date_naive();
    let path = write_export(workspace.store.entries(), &args.output_dir, today)
        .context("export entries")?;
    writeln!(
        out,
        "Exported {} entries to {}",
        workspace.store.len(),
        path.display()
    )?;
    Ok(())
}
