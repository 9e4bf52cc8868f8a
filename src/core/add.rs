//! Interactive add flow: collect a full entry field by field, then save
//! after a single confirmation.

use crate::db::log::wlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::NewEntry;
use crate::ui::messages::{info, menu_title, success, warning};
use crate::ui::prompt;
use crate::utils::date;
use chrono::NaiveDate;

pub struct AddLogic;

impl AddLogic {
    pub fn run(pool: &mut DbPool) -> AppResult<()> {
        menu_title("Add New Entry");

        let Some(d) = Self::read_date_or_today()? else {
            return Ok(());
        };
        let Some(employee_name) =
            prompt::read_nonempty("Enter your name: ", "You must enter your name!")?
        else {
            return Ok(());
        };
        let Some(task_name) =
            prompt::read_nonempty("Enter a task name: ", "You must enter a task name!")?
        else {
            return Ok(());
        };
        let Some(minutes) =
            prompt::read_minutes("Enter number of minutes spent working on the task: ")?
        else {
            return Ok(());
        };
        let Some(notes) = prompt::read_line("Notes for this task (ENTER if none): ")? else {
            return Ok(());
        };
        let notes = if notes.is_empty() { None } else { Some(notes) };

        if !prompt::confirm_default_yes("\nSave entry?")? {
            info("Entry discarded.");
            return Ok(());
        }

        let entry = NewEntry::new(employee_name, task_name, minutes, notes, d);
        let id = queries::insert_entry(&pool.conn, &entry)?;

        if let Err(e) = wlog(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("Added entry #{} for {}", id, entry.employee_name),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success("Entry saved successfully!");
        Ok(())
    }

    /// Date prompt where a blank line means today.
    fn read_date_or_today() -> AppResult<Option<NaiveDate>> {
        loop {
            match prompt::read_line("Enter a date (MM/DD/YYYY, ENTER for today): ")? {
                None => return Ok(None),
                Some(text) if text.is_empty() => return Ok(Some(date::today())),
                Some(text) => match date::parse_mdy(&text) {
                    Ok(d) => return Ok(Some(d)),
                    Err(_) => warning("Invalid date! Enter the date as MM/DD/YYYY."),
                },
            }
        }
    }
}
