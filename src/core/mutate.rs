//! Single-entry mutations: one validated field change, or a delete, each
//! behind an explicit confirm step. Nothing touches the store until the
//! user confirms; a decline leaves both store and screen as they were.

use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::field::{EntryField, FieldEdit};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt;

pub enum EditOutcome {
    /// Committed to the store; the navigator mirrors it in memory.
    Saved(FieldEdit),
    /// User declined at the confirm step.
    NotSaved,
    /// Input stream closed mid-edit.
    Aborted,
}

pub enum DeleteOutcome {
    Deleted,
    Kept,
}

/// Edit mode: choose a field, enter a validated new value, confirm.
pub fn edit(pool: &mut DbPool, entry: &Entry) -> AppResult<EditOutcome> {
    let field = loop {
        let Some(input) =
            prompt::read_line("Edit which field? [t]ask, [d]ate, [m]inutes, [n]otes: ")?
        else {
            return Ok(EditOutcome::Aborted);
        };
        match EntryField::from_selector(&input) {
            Some(f) => break f,
            None => warning("Invalid command. Choose t, d, m or n."),
        }
    };

    let edit = match field {
        EntryField::TaskName => {
            let Some(task) =
                prompt::read_nonempty("Enter a task name: ", "You must enter a task name!")?
            else {
                return Ok(EditOutcome::Aborted);
            };
            FieldEdit::TaskName(task)
        }
        EntryField::Date => {
            let Some(d) = prompt::read_date("Enter a date (MM/DD/YYYY): ")? else {
                return Ok(EditOutcome::Aborted);
            };
            FieldEdit::Date(d)
        }
        EntryField::Minutes => {
            let Some(m) =
                prompt::read_minutes("Enter number of minutes spent working on the task: ")?
            else {
                return Ok(EditOutcome::Aborted);
            };
            FieldEdit::Minutes(m)
        }
        EntryField::Notes => {
            let Some(notes) = prompt::read_line("Notes for this task (ENTER if none): ")? else {
                return Ok(EditOutcome::Aborted);
            };
            FieldEdit::Notes(if notes.is_empty() { None } else { Some(notes) })
        }
    };

    if !prompt::confirm(&format!(
        "Save new {} for entry #{}?",
        field.as_str(),
        entry.id
    ))? {
        info("Changes not saved.");
        return Ok(EditOutcome::NotSaved);
    }

    queries::apply_field_edit(&pool.conn, entry.id, &edit)?;

    if let Err(e) = wlog(
        &pool.conn,
        "edit",
        &entry.id.to_string(),
        &format!("Updated {} of entry #{}", field.as_str(), entry.id),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("Entry updated.");
    Ok(EditOutcome::Saved(edit))
}

/// Delete mode: explicit yes/no, default no on anything but "y"/"yes".
pub fn delete(pool: &mut DbPool, entry: &Entry) -> AppResult<DeleteOutcome> {
    warning(format!(
        "Delete entry #{} (\"{}\" by {})? This action is irreversible.",
        entry.id, entry.task_name, entry.employee_name
    ));

    if !prompt::confirm("Confirm delete")? {
        info("Entry not deleted.");
        return Ok(DeleteOutcome::Kept);
    }

    queries::delete_entry(&pool.conn, entry.id)?;

    if let Err(e) = wlog(
        &pool.conn,
        "del",
        &entry.id.to_string(),
        &format!("Deleted entry #{} ({})", entry.id, entry.task_name),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("Entry deleted.");
    Ok(DeleteOutcome::Deleted)
}
