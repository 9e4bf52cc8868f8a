use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::date;
use crate::utils::formatting::minutes_readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { name, date: day } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let entries = if let Some(text) = name {
            queries::search_name_contains(&pool.conn, text)?
        } else if let Some(day) = day {
            let d = date::parse_mdy(day)
                .map_err(|_| AppError::InvalidDate(day.clone()))?;
            queries::search_exact_date(&pool.conn, &d)?
        } else {
            queries::load_all_entries(&pool.conn)?
        };

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        print_entries(&entries);
    }
    Ok(())
}

fn print_entries(entries: &[Entry]) {
    let mut table = Table::new(&["Date", "Employee", "Task", "Duration", "Notes"]);

    for e in entries {
        table.add_row(vec![
            e.date_str(),
            e.employee_name.clone(),
            e.task_name.clone(),
            minutes_readable(e.minutes),
            truncate(e.notes.as_deref().unwrap_or(""), 40),
        ]);
    }

    println!("📋 Saved entries: {}\n", entries.len());
    print!("{}", table.render());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}
