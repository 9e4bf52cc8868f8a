#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rworklog::db::initialize::init_db;
use rworklog::db::queries;
use rworklog::models::entry::{Entry, NewEntry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema through the CLI, as a user would
pub fn init_test_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Insert one entry directly through the library API. Returns its id.
pub fn seed_entry(
    db_path: &str,
    employee: &str,
    task: &str,
    minutes: u32,
    notes: Option<&str>,
    iso_date: &str,
) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");

    let d = NaiveDate::parse_from_str(iso_date, "%Y-%m-%d").expect("iso date");
    queries::insert_entry(
        &conn,
        &NewEntry::new(
            employee.to_string(),
            task.to_string(),
            minutes,
            notes.map(str::to_string),
            d,
        ),
    )
    .expect("insert entry")
}

pub fn count_entries(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .expect("count entries")
}

pub fn load_entry(db_path: &str, id: i64) -> Entry {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    queries::load_entry(&conn, id)
        .expect("load entry")
        .expect("entry exists")
}
