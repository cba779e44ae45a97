//! Validated one-based page numbers.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a raw page number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageNumberError {
    /// The caller asked for page zero or a negative page.
    #[error("page number must be at least 1 (got {page})")]
    BelowMinimum {
        /// Rejected raw value.
        page: i64,
    },
    /// The value is larger than any page a catalogue can serve.
    #[error("page number {page} is out of range")]
    OutOfRange {
        /// Rejected raw value.
        page: i64,
    },
}

/// A one-based page number.
///
/// # Examples
///
/// ```
/// use pagination::PageNumber;
///
/// let page = PageNumber::new(2).expect("valid page");
/// assert_eq!(page.get(), 2);
/// assert_eq!(page.next().get(), 3);
/// assert!(PageNumber::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page of any listing.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Validate a raw page number.
    ///
    /// # Errors
    ///
    /// Returns [`PageNumberError::BelowMinimum`] for values below one and
    /// [`PageNumberError::OutOfRange`] for values that do not fit in `u32`.
    pub fn new(page: i64) -> Result<Self, PageNumberError> {
        if page < 1 {
            return Err(PageNumberError::BelowMinimum { page });
        }
        u32::try_from(page)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(PageNumberError::OutOfRange { page })
    }

    /// Numeric value of the page.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The page that follows this one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Zero-based index of the page, for offset arithmetic.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = PageNumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.get()
    }
}
