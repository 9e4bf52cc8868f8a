use chrono::NaiveDate;

/// The editable fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    TaskName,
    Date,
    Minutes,
    Notes,
}

impl EntryField {
    /// Parse a single-key field selector from the edit menu.
    pub fn from_selector(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" | "task" => Some(Self::TaskName),
            "d" | "date" => Some(Self::Date),
            "m" | "minutes" => Some(Self::Minutes),
            "n" | "notes" => Some(Self::Notes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskName => "task name",
            Self::Date => "date",
            Self::Minutes => "minutes",
            Self::Notes => "notes",
        }
    }
}

/// A validated single-field change, carrying the new value.
/// Exactly one field is touched per edit transaction.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    TaskName(String),
    Date(NaiveDate),
    Minutes(u32),
    Notes(Option<String>),
}

impl FieldEdit {
    pub fn field(&self) -> EntryField {
        match self {
            Self::TaskName(_) => EntryField::TaskName,
            Self::Date(_) => EntryField::Date,
            Self::Minutes(_) => EntryField::Minutes,
            Self::Notes(_) => EntryField::Notes,
        }
    }
}
