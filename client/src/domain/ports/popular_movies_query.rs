//! Driving port for the page-fetch use case.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Error, Movie};

/// Query port answering "give me page N of the popular movies".
///
/// The page number is taken raw so that validation lives behind the port;
/// callers holding an unchecked number (a CLI flag, a `current + 1`) pass it
/// straight through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PopularMoviesQuery: Send + Sync {
    /// Fetch one page of popular movies.
    ///
    /// Pages below one fail with [`crate::domain::ErrorCode::InvalidRequest`].
    async fn popular_movies(&self, page: i64) -> Result<Page<Movie>, Error>;
}
