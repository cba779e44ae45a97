//! Page-fetch use case for the popular movies listing.
//!
//! The service is the authoritative page-number gate: the live repository
//! forwards whatever it is given to the catalogue, so invalid numbers must be
//! stopped here.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber};
use tracing::debug;

use crate::domain::Error;
use crate::domain::Movie;
use crate::domain::ports::{MovieRepository, MovieRepositoryError, PopularMoviesQuery};

fn map_repository_error(error: MovieRepositoryError) -> Error {
    let message = format!("TMDB API error: {error}");
    match error {
        MovieRepositoryError::Transport { .. } => Error::service_unavailable(message),
        MovieRepositoryError::Timeout { .. } => Error::timeout(message),
        MovieRepositoryError::RateLimited { .. } => Error::rate_limited(message),
        MovieRepositoryError::Upstream { .. } | MovieRepositoryError::Decode { .. } => {
            Error::upstream(message)
        }
        // The page was validated above, so a rejected request is a client fault.
        MovieRepositoryError::InvalidRequest { .. } => Error::internal(message),
    }
}

/// Popular movies service implementing the query driving port.
pub struct PopularMoviesService<R: ?Sized> {
    movie_repo: Arc<R>,
}

impl<R: ?Sized> Clone for PopularMoviesService<R> {
    fn clone(&self) -> Self {
        Self {
            movie_repo: Arc::clone(&self.movie_repo),
        }
    }
}

impl<R: ?Sized> PopularMoviesService<R> {
    /// Create a new service over the movie repository.
    pub fn new(movie_repo: Arc<R>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl<R> PopularMoviesQuery for PopularMoviesService<R>
where
    R: MovieRepository + ?Sized,
{
    async fn popular_movies(&self, page: i64) -> Result<Page<Movie>, Error> {
        let page = PageNumber::new(page).map_err(|err| Error::invalid_request(err.to_string()))?;
        debug!(page = page.get(), "fetching popular movies");

        self.movie_repo
            .popular_movies(page)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "popular_movies_service_tests.rs"]
mod tests;
