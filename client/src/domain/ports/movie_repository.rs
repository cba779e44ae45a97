//! Driven port for loading pages of popular movies.
//!
//! The live adapter reads from the TMDB catalogue; the fixture serves a fixed
//! in-memory list. Both answer the same contract so the use case cannot tell
//! them apart.

use async_trait::async_trait;
use pagination::{Page, PageNumber};

use super::define_port_error;
use crate::domain::Movie;

define_port_error! {
    /// Errors surfaced while loading movies from a catalogue.
    pub enum MovieRepositoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "catalogue transport failed: {message}",
        /// The catalogue did not answer within the configured timeout.
        Timeout { message: String } =>
            "catalogue request timed out: {message}",
        /// The catalogue rate-limited the request.
        RateLimited { message: String } =>
            "catalogue rate limited request: {message}",
        /// The catalogue answered with a non-success status.
        Upstream { status: u16, message: String } =>
            "catalogue returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "catalogue response decode failed: {message}",
        /// The request was rejected before it was sent.
        InvalidRequest { message: String } =>
            "catalogue request invalid: {message}",
    }
}

/// Port for reading the popular movies listing one page at a time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch one page of popular movies.
    ///
    /// Pages beyond the end of the listing are answered with an empty page,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use popular_movies::domain::PageNumber;
    /// use popular_movies::domain::ports::{FixtureMovieRepository, MovieRepository};
    ///
    /// let repo = FixtureMovieRepository::default();
    /// let page = repo.popular_movies(PageNumber::FIRST).await?;
    /// assert_eq!(page.len(), 5);
    /// # Ok::<(), popular_movies::domain::ports::MovieRepositoryError>(())
    /// ```
    async fn popular_movies(&self, page: PageNumber)
    -> Result<Page<Movie>, MovieRepositoryError>;
}
