//! Date codec for the fixed user-facing format MM/DD/YYYY.
//! Storage always uses ISO YYYY-MM-DD text, which sorts chronologically.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// The one accepted textual pattern for user input and display.
pub const DISPLAY_FMT: &str = "%m/%d/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date in MM/DD/YYYY form, zero-padded only.
///
/// chrono accepts "1/5/2016" for %m/%d, so the round-trip check below is
/// what rejects non-padded input: format(parse(x)) must give back x.
pub fn parse_mdy(s: &str) -> AppResult<NaiveDate> {
    let text = s.trim();
    let d = NaiveDate::parse_from_str(text, DISPLAY_FMT)
        .map_err(|_| AppError::InvalidDate(text.to_string()))?;
    if format_mdy(&d) != text {
        return Err(AppError::InvalidDate(text.to_string()));
    }
    Ok(d)
}

/// Inverse of parse_mdy, always zero-padded.
pub fn format_mdy(d: &NaiveDate) -> String {
    d.format(DISPLAY_FMT).to_string()
}

/// ISO text as stored in the database.
pub fn to_iso(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn from_iso(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
