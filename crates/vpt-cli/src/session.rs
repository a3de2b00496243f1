//! Interactive dashboard session.
//!
//! Each input line is split into words with the `csv` reader (space
//! delimited, double-quote quoting) and parsed as a [`SessionCommand`].
//! Failed commands print a banner and leave the session running.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;
use csv::ReaderBuilder;
use tracing::debug;

use vpt_core::{
    Action, Banner, BinState, DialogCoordinator, DialogState, SessionGate, quick_filter_matches,
};
use vpt_model::{EntryId, EntrySubmission, GroupKey, TrackerError};

use crate::cli::{AddArgs, SessionCommand, SessionLine, SetArgs, ToggleArgs};
use crate::commands::{run_athletes, run_export, run_list, run_stats, write_bins};
use crate::config::Workspace;
use crate::render::{draft_text, entry_detail};

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    workspace: Workspace,
    gate: SessionGate,
    dialogs: DialogCoordinator,
    bins: HashMap<GroupKey, BinState>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(workspace: Workspace, gate: SessionGate, out: W) -> Self {
        Self {
            workspace,
            gate,
            dialogs: DialogCoordinator::new(),
            bins: HashMap::new(),
            out,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn dialogs(&self) -> &DialogCoordinator {
        &self.dialogs
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(
            self.out,
            "Video Production Tracker. Type `login <password>` to begin, `help` for commands."
        )?;
        for line in input.lines() {
            let line = line?;
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Runs one input line. Only output failures are returned as errors.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let words = split_words(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(error) => {
                write!(self.out, "{}", error.render())?;
                return Ok(Flow::Continue);
            }
        };
        debug!(command = %words[0], "session command");
        match self.dispatch(command) {
            Ok(flow) => Ok(flow),
            Err(error) => {
                writeln!(self.out, "error: {error:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        match &command {
            SessionCommand::Login { password } => {
                if self.gate.login(password) {
                    writeln!(self.out, "Logged in")?;
                } else {
                    writeln!(self.out, "Invalid password. Please try again.")?;
                }
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
            _ => self.gate.require()?,
        }

        match command {
            SessionCommand::Login { .. } | SessionCommand::Quit => {}
            SessionCommand::Logout => {
                self.gate.logout();
                self.dialogs.cancel();
                writeln!(self.out, "Logged out")?;
            }
            SessionCommand::Add(args) => self.add(args)?,
            SessionCommand::List(args) => run_list(&self.workspace, &args, &mut self.out)?,
            SessionCommand::Bins(args) => {
                let group = GroupKey::from(args.group);
                let state = self.bins.entry(group).or_default();
                if args.all {
                    for member in self.workspace.roster.members(group) {
                        if !state.is_expanded(member) {
                            state.toggle_expanded(member);
                        }
                    }
                }
                write_bins(&self.workspace, group, state, &mut self.out)?;
            }
            SessionCommand::Toggle(args) => self.toggle(args)?,
            SessionCommand::Expand { group, key } => {
                let state = self.bins.entry(group.into()).or_default();
                state.toggle_expanded(&key);
                let expanded = if state.is_expanded(&key) { "expanded" } else { "collapsed" };
                writeln!(self.out, "{key} {expanded}")?;
            }
            SessionCommand::Quick { needle } => {
                let matches = quick_filter_matches(&self.workspace.roster, &needle);
                if matches.is_empty() {
                    writeln!(self.out, "No athletes match '{needle}'")?;
                } else {
                    self.bins
                        .entry(GroupKey::Athlete)
                        .or_default()
                        .open_matching(&matches);
                    writeln!(self.out, "Opened: {}", matches.join(", "))?;
                }
            }
            SessionCommand::Athletes(args) => run_athletes(&self.workspace, &args, &mut self.out)?,
            SessionCommand::Stats => run_stats(&self.workspace, &mut self.out)?,
            SessionCommand::Export(args) => {
                if let Err(error) = run_export(&self.workspace, &args, &mut self.out) {
                    let banner = match error.downcast_ref::<TrackerError>() {
                        Some(tracker) => Banner::from_error(Action::Export, tracker).message,
                        None => format!("{error:#}"),
                    };
                    writeln!(self.out, "{banner}")?;
                }
            }
            SessionCommand::View { id } => self.open(&id, false)?,
            SessionCommand::Edit { id } => self.open(&id, true)?,
            SessionCommand::Set(args) => self.set(args)?,
            SessionCommand::Save => {
                let id = self.dialogs.state().entry_id().cloned();
                match self.dialogs.save(&mut self.workspace.store, &self.workspace.roster) {
                    Ok(()) => writeln!(self.out, "Saved {}", display_id(id.as_ref()))?,
                    Err(error) => self.banner(Action::Update, &error)?,
                }
            }
            SessionCommand::Cancel => {
                self.dialogs.cancel();
                writeln!(self.out, "Edit cancelled")?;
            }
            SessionCommand::Close => {
                self.dialogs.close();
                writeln!(self.out, "Closed")?;
            }
            SessionCommand::Link { id, url } => {
                let id = EntryId::new(id);
                let updated = self
                    .workspace
                    .store
                    .update_link(&id, &url, &self.workspace.roster)
                    .map(|entry| entry.has_link());
                match updated {
                    Ok(true) => writeln!(self.out, "Link saved for {id}")?,
                    Ok(false) => writeln!(self.out, "Link cleared for {id}")?,
                    Err(error) => self.banner(Action::UpdateLink, &error)?,
                }
            }
            SessionCommand::Delete { id, yes } => self.delete(&id, yes)?,
        }
        Ok(Flow::Continue)
    }

    fn banner(&mut self, action: Action, error: &TrackerError) -> Result<()> {
        writeln!(self.out, "{}", Banner::from_error(action, error).message)?;
        Ok(())
    }

    fn add(&mut self, args: AddArgs) -> Result<()> {
        let submission = EntrySubmission {
            athletes: args.athletes,
            shooter: args.shooter,
            editor: args.editor,
            date: args.date,
            title: args.title,
            description: args.description,
            status: args.status,
            link_url: args.link,
        };
        match self.workspace.store.submit(&submission, &self.workspace.roster) {
            Ok(ids) => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                writeln!(self.out, "Added {} entries: {}", ids.len(), ids.join(", "))?;
            }
            Err(TrackerError::Validation(error)) => {
                writeln!(self.out, "Please fill in all required fields: {error}")?;
            }
            Err(error) => self.banner(Action::Add, &error)?,
        }
        Ok(())
    }

    fn toggle(&mut self, args: ToggleArgs) -> Result<()> {
        let group = GroupKey::from(args.group);
        let members = self.workspace.roster.members(group);
        let state = self.bins.entry(group).or_default();
        match (args.key, args.all, args.none) {
            (_, true, _) => state.set_all(members, true),
            (_, _, true) => state.set_all(members, false),
            (Some(key), _, _) => state.toggle(&key),
            (None, false, false) => return Err(anyhow!("name a bin or pass --all/--none")),
        }
        writeln!(self.out, "Bins updated")?;
        Ok(())
    }

    /// Opens a dialog. The CLI renders synchronously, so a dialog that has
    /// to close first is reported closed and the open is settled at once.
    fn open(&mut self, id: &str, edit: bool) -> Result<()> {
        let id = EntryId::new(id);
        let Some(entry) = self.workspace.store.get(&id) else {
            return Err(TrackerError::NotFound { id }.into());
        };
        let previous = self.dialogs.state().clone();
        if edit {
            self.dialogs.edit(entry);
        } else {
            self.dialogs.view(entry);
        }
        if self.dialogs.has_pending() {
            writeln!(self.out, "Closed {previous}")?;
            self.dialogs.settle();
        }
        match self.dialogs.state() {
            DialogState::Viewing(_) => write!(self.out, "{}", entry_detail(entry))?,
            DialogState::Editing(id) => {
                writeln!(self.out, "Editing {id}")?;
                if let Some(draft) = self.dialogs.draft() {
                    write!(self.out, "{}", draft_text(draft))?;
                }
            }
            DialogState::Idle => {}
        }
        Ok(())
    }

    fn set(&mut self, args: SetArgs) -> Result<()> {
        let Some(draft) = self.dialogs.draft_mut() else {
            return Err(anyhow!("no entry is being edited; use `edit <id>` first"));
        };
        let SetArgs {
            date,
            athlete,
            title,
            shooter,
            editor,
            description,
            status,
            link,
        } = args;
        draft.date = date.or(draft.date.take());
        draft.athlete = athlete.or(draft.athlete.take());
        draft.title = title.or(draft.title.take());
        draft.shooter = shooter.or(draft.shooter.take());
        draft.editor = editor.or(draft.editor.take());
        draft.description = description.or(draft.description.take());
        draft.status = status.or(draft.status);
        draft.link_url = link.or(draft.link_url.take());
        let text = draft_text(draft);
        write!(self.out, "{text}")?;
        Ok(())
    }

    fn delete(&mut self, id: &str, confirmed: bool) -> Result<()> {
        let id = EntryId::new(id);
        if !confirmed {
            writeln!(
                self.out,
                "Are you sure you want to delete {id}? Repeat with --yes to confirm."
            )?;
            return Ok(());
        }
        match self.workspace.store.remove(&id) {
            Ok(entry) => {
                self.dialogs.reconcile(&self.workspace.store);
                writeln!(self.out, "Deleted {} ({})", entry.id, entry.title)?;
            }
            Err(error) if error.is_not_found() => {
                writeln!(self.out, "Nothing to delete: {id} is not in the tracker")?;
            }
            Err(error) => self.banner(Action::Delete, &error)?,
        }
        Ok(())
    }
}

fn display_id(id: Option<&EntryId>) -> String {
    id.map(ToString::to_string).unwrap_or_default()
}

/// Splits a line into words, honouring double quotes.
///
/// Runs of whitespace outside quotes separate words; a quoted `""` is kept
/// as an empty word so optional values can be cleared.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let collapsed = collapse_whitespace(line);
    if collapsed.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(collapsed.as_bytes());
    let mut words = Vec::new();
    if let Some(record) = reader.records().next() {
        words.extend(record?.iter().map(str::to_string));
    }
    Ok(words)
}

/// Trims the line and reduces unquoted whitespace runs to a single space.
fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quoted = false;
    let mut pending_space = false;
    for ch in line.trim().chars() {
        if !quoted && ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if ch == '"' {
            quoted = !quoted;
        }
        out.push(ch);
    }
    out
}
