//! `MovieRepository` adapter backed by the TMDB data source.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber};
use tracing::warn;

use super::mapper::to_domain_page;
use super::source::TmdbMovieSource;
use crate::domain::Movie;
use crate::domain::ports::{MovieRepository, MovieRepositoryError};
use crate::outbound::http::HttpTransport;

/// Live repository composing [`TmdbMovieSource`] with the TMDB mapper.
pub struct TmdbMovieRepository<T: ?Sized> {
    source: TmdbMovieSource<T>,
}

impl<T> TmdbMovieRepository<T>
where
    T: HttpTransport + ?Sized,
{
    /// Create a repository over a shared transport.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            source: TmdbMovieSource::new(transport),
        }
    }
}

#[async_trait]
impl<T> MovieRepository for TmdbMovieRepository<T>
where
    T: HttpTransport + ?Sized,
{
    async fn popular_movies(
        &self,
        page: PageNumber,
    ) -> Result<Page<Movie>, MovieRepositoryError> {
        match self.source.popular_movies(page).await {
            Ok(dto) => Ok(to_domain_page(dto)),
            Err(error) => {
                warn!(page = page.get(), %error, "popular movies request failed");
                Err(error)
            }
        }
    }
}
