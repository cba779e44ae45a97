//! Page envelope returned by paginated catalogue queries.

use serde::{Deserialize, Serialize};

/// One page of an ordered listing plus the listing's totals.
///
/// Items keep the order the source produced them in. A page requested beyond
/// `total_pages` carries no items.
///
/// # Examples
///
/// ```
/// use pagination::Page;
///
/// let page = Page::new(1, vec!["a", "b"], 3, 6);
/// assert!(page.has_next_page());
/// assert!(!page.has_previous_page());
/// assert_eq!(page.map(str::len).items(), &[1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    page: u32,
    items: Vec<T>,
    total_pages: u32,
    total_results: u64,
}

impl<T> Page<T> {
    /// Assemble an envelope from its parts.
    #[must_use]
    pub const fn new(page: u32, items: Vec<T>, total_pages: u32, total_results: u64) -> Self {
        Self {
            page,
            items,
            total_pages,
            total_results,
        }
    }

    /// Page number this envelope answers.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items on this page in source order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total number of pages in the listing.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total number of results in the listing.
    #[must_use]
    pub const fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Convert every item, keeping order and totals.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page: self.page,
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }

    /// Take ownership of the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
