//! Record Store contract over the `entries` table.
//!
//! Every search returns entries ordered by date descending, ties broken by
//! ascending id (insertion order). Mutations address rows by id; a mutation
//! that touches zero rows reports NotFound so callers never keep working
//! against a record that vanished underneath them.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, NewEntry};
use crate::models::field::FieldEdit;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

const SELECT_ENTRY: &str =
    "SELECT id, employee_name, task_name, minutes, notes, date, created_at FROM entries";

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    let d = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        employee_name: row.get("employee_name")?,
        task_name: row.get("task_name")?,
        minutes: row.get("minutes")?,
        notes: row.get("notes")?,
        date: d,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (employee_name, task_name, minutes, notes, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.employee_name,
            entry.task_name,
            entry.minutes,
            entry.notes,
            date::to_iso(&entry.date),
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load one entry by id. Returns None when the row is gone.
pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!("{} WHERE id = ?1", SELECT_ENTRY))?;
    let mut rows = stmt.query_map([id], map_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn search_exact_name(conn: &Connection, name: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = stmt_with_filter(conn, "employee_name = ?1")?;
    let rows = stmt.query_map([name], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// instr() instead of LIKE: LIKE is case-insensitive for ASCII and the
// substring match must see names exactly as stored.
pub fn search_name_contains(conn: &Connection, text: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = stmt_with_filter(conn, "instr(employee_name, ?1) > 0")?;
    let rows = stmt.query_map([text], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn search_exact_date(conn: &Connection, d: &NaiveDate) -> AppResult<Vec<Entry>> {
    let mut stmt = stmt_with_filter(conn, "date = ?1")?;
    let rows = stmt.query_map([date::to_iso(d)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Inclusive on both bounds. Callers validate start <= end first.
pub fn search_date_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Entry>> {
    let mut stmt = stmt_with_filter(conn, "date >= ?1 AND date <= ?2")?;
    let rows = stmt.query_map([date::to_iso(start), date::to_iso(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn search_keyword(conn: &Connection, text: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = stmt_with_filter(
        conn,
        "(instr(task_name, ?1) > 0 OR instr(IFNULL(notes, ''), ?1) > 0)",
    )?;
    let rows = stmt.query_map([text], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load every entry, newest first. Used by the non-interactive list view.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{} ORDER BY date DESC, id ASC",
        SELECT_ENTRY
    ))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Persist exactly one field change for the given entry id.
pub fn apply_field_edit(conn: &Connection, id: i64, edit: &FieldEdit) -> AppResult<()> {
    let changed = match edit {
        FieldEdit::TaskName(task) => conn.execute(
            "UPDATE entries SET task_name = ?1 WHERE id = ?2",
            params![task, id],
        )?,
        FieldEdit::Date(d) => conn.execute(
            "UPDATE entries SET date = ?1 WHERE id = ?2",
            params![date::to_iso(d), id],
        )?,
        FieldEdit::Minutes(m) => conn.execute(
            "UPDATE entries SET minutes = ?1 WHERE id = ?2",
            params![m, id],
        )?,
        FieldEdit::Notes(notes) => conn.execute(
            "UPDATE entries SET notes = ?1 WHERE id = ?2",
            params![notes, id],
        )?,
    };

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

fn stmt_with_filter<'a>(
    conn: &'a Connection,
    filter: &str,
) -> Result<rusqlite::CachedStatement<'a>> {
    conn.prepare_cached(&format!(
        "{} WHERE {} ORDER BY date DESC, id ASC",
        SELECT_ENTRY, filter
    ))
}
