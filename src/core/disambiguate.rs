//! Resolve a substring name match that spans several employees.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::ui::messages::{info, warning};
use crate::ui::prompt;

/// Distinct employee names present in a result set, first-seen order.
pub fn distinct_names(entries: &[Entry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for e in entries {
        if !names.iter().any(|n| n == &e.employee_name) {
            names.push(e.employee_name.clone());
        }
    }
    names
}

/// If the result set covers more than one distinct employee, make the user
/// pick one of the names verbatim and re-query the store for an exact
/// match. Loops until a listed name is chosen; only EOF breaks out, in
/// which case `None` is returned and the session ends.
pub fn resolve(pool: &mut DbPool, entries: Vec<Entry>) -> AppResult<Option<Vec<Entry>>> {
    let names = distinct_names(&entries);
    if names.len() <= 1 {
        return Ok(Some(entries));
    }

    info("Your search matched more than one employee:");
    loop {
        for name in &names {
            println!("  - {}", name);
        }

        let Some(choice) = prompt::read_line("Enter one of the names above exactly: ")? else {
            return Ok(None);
        };

        if names.iter().any(|n| *n == choice) {
            return Ok(Some(queries::search_exact_name(&pool.conn, &choice)?));
        }

        warning("That is not one of the listed names.");
    }
}
