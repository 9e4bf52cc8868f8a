use chrono::NaiveDate;

/// One search invocation, built per request and discarded afterwards.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Employee name equals the given text exactly.
    ExactName(String),
    /// Employee name contains the given text (case-sensitive, as stored).
    NameContains(String),
    /// Entry date equals the given date.
    ExactDate(NaiveDate),
    /// Entry date lies within [start, end] inclusive.
    /// `start <= end` is enforced when the query is executed.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Task name or notes contain the given text.
    Keyword(String),
}
