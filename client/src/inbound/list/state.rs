//! Accumulated list state and its transition function.
//!
//! Every change goes through [`reduce`], which consumes the previous state and
//! an event and returns the next state. Requests are stamped with a
//! [`Generation`]; completions carrying any generation other than the latest
//! issued one are discarded, so a slow response can never overwrite the
//! outcome of a newer request.

use pagination::{Page, PageNumber};

/// How a successful page is merged into the accumulated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Concatenate the page after the existing items.
    Append,
    /// Discard existing items in favour of the page.
    Replace,
}

/// User-level operations a list view can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperation {
    /// First load after the view appears.
    LoadInitial,
    /// Fetch the page after the last one loaded.
    LoadNextPage,
    /// Reload from the first page.
    Refresh,
}

/// Monotonic stamp identifying one issued request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Value before any request was issued.
    pub const NONE: Self = Self(0);

    const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A page request produced by [`ListState::plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub page: PageNumber,
    pub mode: LoadMode,
}

/// Inputs to [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    /// A request was issued. Stamps it with the next generation.
    Requested { page: PageNumber, mode: LoadMode },
    /// A request completed with a page.
    Succeeded { generation: Generation, page: Page<T> },
    /// A request failed with a user-facing message.
    Failed { generation: Generation, message: String },
}

impl<T> From<LoadRequest> for ListEvent<T> {
    fn from(request: LoadRequest) -> Self {
        Self::Requested {
            page: request.page,
            mode: request.mode,
        }
    }
}

/// Coarse lifecycle of a list, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed; earlier items are kept.
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    generation: Generation,
    mode: LoadMode,
}

/// Items accumulated by one list view plus its pagination and request status.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    current_page: u32,
    total_pages: u32,
    total_results: u64,
    error: Option<String>,
    generation: Generation,
    in_flight: Option<InFlight>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_results: 0,
            error: None,
            generation: Generation::NONE,
            in_flight: None,
        }
    }
}

impl<T> ListState<T> {
    /// Empty state for a freshly mounted view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items accumulated so far, in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Last successfully loaded page, `0` before the first success.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Message from the latest failed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a completion stamped with `generation` would be applied.
    pub fn is_awaiting(&self, generation: Generation) -> bool {
        self.in_flight
            .is_some_and(|in_flight| in_flight.generation == generation)
    }

    pub fn phase(&self) -> ListPhase {
        if self.is_loading() {
            ListPhase::Loading
        } else if self.error.is_some() {
            ListPhase::Errored
        } else if self.generation == Generation::NONE {
            ListPhase::Idle
        } else {
            ListPhase::Loaded
        }
    }

    /// Decide which page, if any, `operation` should request.
    ///
    /// The initial load only runs from [`ListPhase::Idle`]. Loading the next
    /// page is ignored while a request is in flight or when the last page has
    /// been reached. Refresh always restarts from the first page.
    pub fn plan(&self, operation: ListOperation) -> Option<LoadRequest> {
        match operation {
            ListOperation::LoadInitial => (self.phase() == ListPhase::Idle).then_some(LoadRequest {
                page: PageNumber::FIRST,
                mode: LoadMode::Replace,
            }),
            ListOperation::LoadNextPage => {
                if self.is_loading() || !self.has_next_page() {
                    return None;
                }
                let page = PageNumber::new(i64::from(self.current_page) + 1).ok()?;
                Some(LoadRequest {
                    page,
                    mode: LoadMode::Append,
                })
            }
            ListOperation::Refresh => Some(LoadRequest {
                page: PageNumber::FIRST,
                mode: LoadMode::Replace,
            }),
        }
    }

    /// Transform the items while keeping pagination and request status.
    pub fn map<U, F>(self, f: F) -> ListState<U>
    where
        F: FnMut(T) -> U,
    {
        ListState {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            error: self.error,
            generation: self.generation,
            in_flight: self.in_flight,
        }
    }
}

/// Advance `state` by one event.
///
/// `Requested` marks the list as loading, clears the previous error and
/// issues a new generation. A completion is applied only when it carries the
/// generation of the request currently in flight; otherwise the state is
/// returned untouched. Failures keep the items and page counters from before
/// the request.
///
/// # Examples
/// ```
/// use popular_movies::domain::{Page, PageNumber};
/// use popular_movies::inbound::list::{reduce, ListEvent, ListState, LoadMode};
///
/// let state = reduce(
///     ListState::new(),
///     ListEvent::Requested { page: PageNumber::FIRST, mode: LoadMode::Replace },
/// );
/// let generation = state.generation();
/// let state = reduce(
///     state,
///     ListEvent::Succeeded { generation, page: Page::new(1, vec!["a", "b"], 2, 4) },
/// );
/// assert_eq!(state.items(), ["a", "b"]);
/// assert!(state.has_next_page());
/// ```
pub fn reduce<T>(state: ListState<T>, event: ListEvent<T>) -> ListState<T> {
    match event {
        ListEvent::Requested { mode, .. } => {
            let generation = state.generation.next();
            ListState {
                error: None,
                generation,
                in_flight: Some(InFlight { generation, mode }),
                ..state
            }
        }
        ListEvent::Succeeded { generation, page } => {
            let Some(in_flight) = state.in_flight.filter(|f| f.generation == generation) else {
                return state;
            };
            let page_number = page.page();
            let total_pages = page.total_pages();
            let total_results = page.total_results();
            let mut items = match in_flight.mode {
                LoadMode::Append => state.items,
                LoadMode::Replace => Vec::new(),
            };
            items.extend(page.into_items());
            ListState {
                items,
                current_page: page_number,
                total_pages,
                total_results,
                error: None,
                generation: state.generation,
                in_flight: None,
            }
        }
        ListEvent::Failed {
            generation,
            message,
        } => {
            if !state.is_awaiting(generation) {
                return state;
            }
            ListState {
                error: Some(message),
                in_flight: None,
                ..state
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
