//! Interactive paging over one search's result set.
//!
//! The navigator owns a cursor into an ordered, in-memory copy of the
//! results. The displayed entry is always `entries[cursor]`; the cursor is
//! clamped after every delete and the session ends the moment the result
//! set runs dry. Edits and deletes go through the mutator and are mirrored
//! into the in-memory set afterwards, so screen and store never disagree.

use crate::config::Config;
use crate::core::mutate::{self, DeleteOutcome, EditOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::field::FieldEdit;
use crate::ui::messages::{error, info, warning};
use crate::ui::prompt;
use crate::utils::formatting::{bold, minutes_readable};

/// The five navigation actions, dispatched by explicit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
    Edit,
    Delete,
    Quit,
}

impl NavCommand {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "p" | "previous" => Some(Self::Previous),
            "n" | "next" => Some(Self::Next),
            "e" | "edit" => Some(Self::Edit),
            "d" | "delete" => Some(Self::Delete),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "[P]revious",
            Self::Next => "[N]ext",
            Self::Edit => "[E]dit",
            Self::Delete => "[D]elete",
            Self::Quit => "[Q]uit",
        }
    }
}

/// Cursor over a non-empty result set.
pub struct Navigator {
    entries: Vec<Entry>,
    cursor: usize,
}

impl Navigator {
    /// Returns None for an empty result set: there is nothing to navigate.
    pub fn new(entries: Vec<Entry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &Entry {
        &self.entries[self.cursor]
    }

    pub fn can_move_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_move_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Commands offered at the current position. Previous/next are not
    /// offered at all on a single-entry set, and are dropped at the ends
    /// of a larger one.
    pub fn options(&self) -> Vec<NavCommand> {
        let mut out = Vec::new();
        if self.can_move_back() {
            out.push(NavCommand::Previous);
        }
        if self.can_move_forward() {
            out.push(NavCommand::Next);
        }
        out.push(NavCommand::Edit);
        out.push(NavCommand::Delete);
        out.push(NavCommand::Quit);
        out
    }

    pub fn is_legal(&self, cmd: NavCommand) -> bool {
        match cmd {
            NavCommand::Previous => self.can_move_back(),
            NavCommand::Next => self.can_move_forward(),
            NavCommand::Edit | NavCommand::Delete | NavCommand::Quit => true,
        }
    }

    pub fn options_line(&self) -> String {
        self.options()
            .iter()
            .map(NavCommand::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Move towards older positions in the set. False when already at 0.
    pub fn move_back(&mut self) -> bool {
        if !self.can_move_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_forward(&mut self) -> bool {
        if !self.can_move_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Mirror a confirmed single-field edit into the in-memory set.
    /// The set keeps its size, so the cursor stays put.
    pub fn apply_current(&mut self, edit: &FieldEdit) {
        self.entries[self.cursor].apply(edit);
    }

    /// Drop the entry under the cursor and clamp the cursor to the new
    /// bounds. The caller must check `is_empty` afterwards: an empty set
    /// leaves the cursor undefined and ends the session.
    pub fn remove_current(&mut self) -> Entry {
        let removed = self.entries.remove(self.cursor);
        if !self.entries.is_empty() {
            self.cursor = self.cursor.min(self.entries.len() - 1);
        }
        removed
    }
}

/// Interactive session driver over a result set.
pub struct NavigateLogic;

impl NavigateLogic {
    pub fn run(pool: &mut DbPool, cfg: &Config, entries: Vec<Entry>) -> AppResult<()> {
        let Some(mut nav) = Navigator::new(entries) else {
            return Ok(());
        };

        loop {
            display_entry(cfg, nav.current(), nav.cursor(), nav.len());

            let Some(input) = prompt::read_line(&format!("{}: ", nav.options_line()))? else {
                return Ok(());
            };

            let Some(cmd) = NavCommand::from_input(&input) else {
                warning("Invalid command.");
                continue;
            };

            if !nav.is_legal(cmd) {
                warning(format!("{} is not available here.", cmd.label()));
                continue;
            }

            match cmd {
                NavCommand::Previous => {
                    nav.move_back();
                }
                NavCommand::Next => {
                    nav.move_forward();
                }
                NavCommand::Quit => return Ok(()),
                NavCommand::Edit => match mutate::edit(pool, nav.current()) {
                    Ok(EditOutcome::Saved(edit)) => nav.apply_current(&edit),
                    Ok(EditOutcome::NotSaved) => {}
                    Ok(EditOutcome::Aborted) => return Ok(()),
                    Err(AppError::NotFound(id)) => return stale_entry(id),
                    Err(e) => return Err(e),
                },
                NavCommand::Delete => match mutate::delete(pool, nav.current()) {
                    Ok(DeleteOutcome::Deleted) => {
                        nav.remove_current();
                        if nav.is_empty() {
                            info("No entries left in this result set.");
                            return Ok(());
                        }
                    }
                    Ok(DeleteOutcome::Kept) => {}
                    Err(AppError::NotFound(id)) => return stale_entry(id),
                    Err(e) => return Err(e),
                },
            }
        }
    }
}

/// The record vanished between query and mutation. The cursor is stale,
/// so the whole session is wound down and the user starts a fresh query.
fn stale_entry(id: i64) -> AppResult<()> {
    error(format!(
        "Entry #{} no longer exists; the result set is out of date.",
        id
    ));
    info("Please run a new search.");
    Ok(())
}

fn display_entry(cfg: &Config, entry: &Entry, pos: usize, len: usize) {
    let sep = cfg.separator_char.repeat(cfg.wrap_width);

    println!("\n{}", sep);
    println!("Date:     {}", entry.date_str());
    println!("Employee: {}", entry.employee_name);
    println!("Task:     {}", entry.task_name);
    println!(
        "Duration: {} min ({})",
        entry.minutes,
        minutes_readable(entry.minutes)
    );
    if let Some(notes) = &entry.notes {
        let opts = textwrap::Options::new(cfg.wrap_width)
            .initial_indent("Notes:    ")
            .subsequent_indent("          ");
        println!("{}", textwrap::fill(notes, opts));
    }
    println!("{}", sep);
    println!("{}", bold(&format!("Result {} of {}", pos + 1, len)));
}
