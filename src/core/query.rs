//! Query engine: one SearchQuery in, one date-descending result set out.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::query::SearchQuery;
use crate::utils::date;
use rusqlite::Connection;

/// Execute one search against the record store.
///
/// An empty result is a valid outcome, not an error; callers decide how to
/// react. The only failure produced here besides store errors is
/// InvalidRange, for a date range whose end precedes its start.
pub fn execute(conn: &Connection, query: &SearchQuery) -> AppResult<Vec<Entry>> {
    match query {
        SearchQuery::ExactName(name) => queries::search_exact_name(conn, name),
        SearchQuery::NameContains(text) => queries::search_name_contains(conn, text),
        SearchQuery::ExactDate(d) => queries::search_exact_date(conn, d),
        SearchQuery::DateRange { start, end } => {
            if end < start {
                return Err(AppError::InvalidRange {
                    start: date::format_mdy(start),
                    end: date::format_mdy(end),
                });
            }
            queries::search_date_range(conn, start, end)
        }
        SearchQuery::Keyword(text) => queries::search_keyword(conn, text),
    }
}
