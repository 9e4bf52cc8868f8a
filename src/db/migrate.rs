use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
fn entries_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `entries` table has a `created_at` column.
fn entries_has_created_at_column(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "created_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `entries` table with the modern schema.
fn create_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT NOT NULL,
            task_name     TEXT NOT NULL,
            minutes       INTEGER NOT NULL DEFAULT 0 CHECK(minutes >= 0),
            notes         TEXT,
            date          TEXT NOT NULL,
            created_at    TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_employee ON entries(employee_name);
        "#,
    )?;
    Ok(())
}

/// Add `created_at` to entries tables created before 0.3.0.
fn migrate_add_created_at_column(conn: &Connection) -> AppResult<()> {
    let version = "20250601_0003_add_created_at";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if entries_has_created_at_column(conn)? {
        // Schema already modern (fresh install); just record the version.
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Schema already has created_at')",
            [version],
        )?;
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE entries ADD COLUMN created_at TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| AppError::Migration(format!("Failed to add 'created_at' column: {}", e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added created_at to entries')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'created_at' to entries table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !entries_table_exists(conn)? {
        create_entries_table(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
            CREATE INDEX IF NOT EXISTS idx_entries_employee ON entries(employee_name);
            "#,
        )?;
    }

    migrate_add_created_at_column(conn)?;

    Ok(())
}
