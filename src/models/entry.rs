use crate::models::field::FieldEdit;
use crate::utils::date;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One stored work-log record, identity included.
///
/// The `id` is the SQLite rowid and is the handle used for updates and
/// deletes: search results are in-memory copies, so every mutation must go
/// back to the store by id rather than by value.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub id: i64,
    pub employee_name: String,
    pub task_name: String,
    pub minutes: u32,
    pub notes: Option<String>,
    pub date: NaiveDate,       // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub created_at: String,    // ⇔ entries.created_at (TEXT, ISO8601)
}

impl Entry {
    /// Date in the user-facing MM/DD/YYYY format.
    pub fn date_str(&self) -> String {
        date::format_mdy(&self.date)
    }

    /// Apply a single confirmed field change to this in-memory copy.
    /// The store is updated separately, by id.
    pub fn apply(&mut self, edit: &FieldEdit) {
        match edit {
            FieldEdit::TaskName(task) => self.task_name = task.clone(),
            FieldEdit::Date(d) => self.date = *d,
            FieldEdit::Minutes(m) => self.minutes = *m,
            FieldEdit::Notes(notes) => self.notes = notes.clone(),
        }
    }
}

/// A record about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub employee_name: String,
    pub task_name: String,
    pub minutes: u32,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub created_at: String,
}

impl NewEntry {
    pub fn new(
        employee_name: String,
        task_name: String,
        minutes: u32,
        notes: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            employee_name,
            task_name,
            minutes,
            notes,
            date,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
