//! Release dates as reported by the catalogue.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A movie's release date.
///
/// Catalogue payloads carry `YYYY-MM-DD` text, but unreleased titles often
/// ship an empty string. Text that does not parse is kept verbatim rather
/// than rejected.
///
/// # Examples
/// ```
/// use popular_movies::domain::ReleaseDate;
///
/// let date = ReleaseDate::parse("2019-05-30");
/// assert_eq!(date.year(), Some(2019));
/// assert_eq!(date.to_string(), "2019-05-30");
///
/// let unknown = ReleaseDate::parse("");
/// assert_eq!(unknown.year(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseDate {
    /// A well-formed calendar date.
    Calendar(NaiveDate),
    /// Text that is not an ISO calendar date.
    Unparsed(String),
}

impl ReleaseDate {
    /// Interpret catalogue text as a date, keeping the raw text on failure.
    pub fn parse(raw: &str) -> Self {
        NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT)
            .map_or_else(|_| Self::Unparsed(raw.to_owned()), Self::Calendar)
    }

    /// Calendar date, when the source text was well formed.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Calendar(date) => Some(*date),
            Self::Unparsed(_) => None,
        }
    }

    /// Release year, when known.
    pub fn year(&self) -> Option<i32> {
        self.date().map(|date| date.year())
    }
}

impl From<NaiveDate> for ReleaseDate {
    fn from(value: NaiveDate) -> Self {
        Self::Calendar(value)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar(date) => write!(f, "{}", date.format(ISO_DATE_FORMAT)),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for ReleaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
