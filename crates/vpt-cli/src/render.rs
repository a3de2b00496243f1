//! Table rendering for the dashboard views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vpt_core::{AthleteSummary, BinState, DashboardStats, VisibleBin};
use vpt_core::views::Bin;
use vpt_model::{Entry, EntryPatch, GroupKey, Status};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::InProgress => Color::Yellow,
        Status::Completed => Color::Blue,
        Status::Published => Color::Green,
    };
    Cell::new(status.as_str()).fg(color)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Entry list with one row per entry.
pub fn entries_table(entries: &[&Entry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Date"),
        header_cell("Athlete"),
        header_cell("Title"),
        header_cell("Shooter"),
        header_cell("Editor"),
        header_cell("Status"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id.as_str()),
            Cell::new(&entry.date),
            Cell::new(&entry.athlete),
            Cell::new(&entry.title),
            Cell::new(&entry.shooter),
            Cell::new(&entry.editor),
            status_cell(entry.status),
            Cell::new(if entry.has_link() { "View" } else { "-" }),
        ]);
    }
    table
}

/// Bin heading as the dashboard labels it.
pub fn bin_title(group: GroupKey, bin: &Bin<'_>) -> String {
    let count = bin.len();
    if group == GroupKey::Shooter && bin.key == "Multiple" {
        format!("Multiple Shooters ({count} videos)")
    } else {
        format!("{}'s Bin ({count} videos)", bin.key)
    }
}

/// Renders bins; closed bins show only their heading.
pub fn bins_text(group: GroupKey, bins: &[Bin<'_>], state: &BinState) -> String {
    let mut out = String::new();
    for bin in bins {
        let marker = if state.is_open(&bin.key) { "▾" } else { "▸" };
        out.push_str(&format!("{marker} {}\n", bin_title(group, bin)));
        if !state.is_open(&bin.key) {
            continue;
        }
        if bin.is_empty() {
            out.push_str("    No videos yet\n");
            continue;
        }
        let VisibleBin { entries, hidden } = state.visible(&bin.key, &bin.entries);
        for entry in entries {
            out.push_str(&format!(
                "    [{}] {} - {} ({}, {})\n",
                entry.id, entry.date, entry.title, entry.athlete, entry.status
            ));
        }
        if hidden > 0 {
            out.push_str(&format!("    Show More ({hidden} more videos)\n"));
        }
    }
    out
}

pub fn athletes_table(summaries: &[AthleteSummary<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Athlete"),
        header_cell("Videos"),
        header_cell("Latest"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in summaries {
        let latest = summary
            .videos_by_date()
            .first()
            .map(|entry| format!("{} ({})", entry.title, entry.date))
            .unwrap_or_else(|| "-".to_string());
        let count = Cell::new(summary.video_count());
        let count = if summary.video_count() == 0 {
            count.fg(Color::Red)
        } else {
            count
        };
        table.add_row(vec![Cell::new(&summary.name), count, Cell::new(latest)]);
    }
    table
}

pub fn stats_text(stats: &DashboardStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total videos: {}\n", stats.total_videos));
    out.push_str(&format!(
        "Athletes with content: {} of {}\n",
        stats.athletes_with_content, stats.total_athletes
    ));
    out.push_str(&format!(
        "Athletes without content: {}\n",
        stats.athletes_without_content.len()
    ));
    for (status, count) in &stats.status_counts {
        out.push_str(&format!("{status}: {count}\n"));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Editor"),
        header_cell("Videos"),
        header_cell("Shooter"),
        header_cell("Videos"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let rows = stats.editor_counts.len().max(stats.shooter_counts.len());
    for idx in 0..rows {
        let (editor, editor_count) = count_cells(stats.editor_counts.get(idx));
        let (shooter, shooter_count) = count_cells(stats.shooter_counts.get(idx));
        table.add_row(vec![editor, editor_count, shooter, shooter_count]);
    }
    out.push_str(&format!("{table}\n"));

    if !stats.athletes_without_content.is_empty() {
        out.push_str(&format!(
            "Need content: {}\n",
            stats.athletes_without_content.join(", ")
        ));
    }
    out
}

fn count_cells(row: Option<&(String, usize)>) -> (Cell, Cell) {
    match row {
        Some((name, count)) => (Cell::new(name), Cell::new(count)),
        None => (Cell::new(""), Cell::new("")),
    }
}

/// Detail dialog body.
pub fn entry_detail(entry: &Entry) -> String {
    let link = if entry.has_link() {
        entry.link_url.as_str()
    } else {
        "-"
    };
    let description = if entry.description.is_empty() {
        "-"
    } else {
        entry.description.as_str()
    };
    format!(
        "Entry {}\n  Title:       {}\n  Athlete:     {}\n  Date:        {}\n  Shooter:     {}\n  Editor:      {}\n  Status:      {}\n  Link:        {}\n  Description: {}\n  Created:     {}\n",
        entry.id,
        entry.title,
        entry.athlete,
        entry.date,
        entry.shooter,
        entry.editor,
        entry.status,
        link,
        description,
        entry.created_at
    )
}

/// Edit dialog body showing the current draft values.
pub fn draft_text(draft: &EntryPatch) -> String {
    let value = |field: &Option<String>| field.clone().unwrap_or_default();
    format!(
        "  date={}\n  athlete={}\n  title={}\n  shooter={}\n  editor={}\n  description={}\n  status={}\n  link={}\n",
        value(&draft.date),
        value(&draft.athlete),
        value(&draft.title),
        value(&draft.shooter),
        value(&draft.editor),
        value(&draft.description),
        draft.status.map(|status| status.as_str()).unwrap_or(""),
        value(&draft.link_url)
    )
}
