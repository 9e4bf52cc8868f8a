//! Line-oriented prompting over stdin.
//!
//! Every interactive loop in core reads through here. A closed input stream
//! (EOF) is reported as `None` so callers can wind the session down instead
//! of spinning on an empty reader; re-prompting is always an explicit loop
//! at the call site or in the typed helpers below, never recursion.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Print `prompt` without a newline and read one trimmed input line.
/// Returns `None` when stdin is exhausted.
pub fn read_line(prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep asking until the user enters a non-empty line.
pub fn read_nonempty(prompt: &str, empty_msg: &str) -> AppResult<Option<String>> {
    loop {
        match read_line(prompt)? {
            None => return Ok(None),
            Some(text) if text.is_empty() => warning(empty_msg),
            Some(text) => return Ok(Some(text)),
        }
    }
}

/// Keep asking until the user enters a date in MM/DD/YYYY form.
pub fn read_date(prompt: &str) -> AppResult<Option<NaiveDate>> {
    loop {
        match read_line(prompt)? {
            None => return Ok(None),
            Some(text) => match date::parse_mdy(&text) {
                Ok(d) => return Ok(Some(d)),
                Err(_) => warning("Invalid date! Enter the date as MM/DD/YYYY."),
            },
        }
    }
}

/// Keep asking until the user enters a non-negative whole number of minutes.
pub fn read_minutes(prompt: &str) -> AppResult<Option<u32>> {
    loop {
        match read_line(prompt)? {
            None => return Ok(None),
            Some(text) => match text.parse::<u32>() {
                Ok(m) => return Ok(Some(m)),
                Err(_) => warning("Not a valid time entry! Enter time as a whole integer."),
            },
        }
    }
}

/// Ask a yes/no confirmation. Anything that is not "y"/"yes" counts as no,
/// EOF included.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    let answer = read_line(&format!("{} [y/N]: ", prompt))?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("y") | Some("yes")
    ))
}

/// Ask a yes/no confirmation that defaults to yes: only an explicit
/// "n"/"no" declines, but EOF never silently commits anything.
/// Used by the add flow ("Save entry? [Y/n]").
pub fn confirm_default_yes(prompt: &str) -> AppResult<bool> {
    match read_line(&format!("{} [Y/n]: ", prompt))? {
        None => Ok(false),
        Some(answer) => Ok(!matches!(answer.to_lowercase().as_str(), "n" | "no")),
    }
}
