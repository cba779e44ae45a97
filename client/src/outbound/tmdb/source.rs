//! Catalogue data source reading TMDB's popular listing.

use std::sync::Arc;

use pagination::PageNumber;
use tracing::debug;

use super::dto::PopularMoviesDto;
use crate::domain::ports::MovieRepositoryError;
use crate::outbound::http::{HttpTransport, TransportError, TransportRequest};

/// Endpoint serving the popular movies listing.
pub const POPULAR_MOVIES_ENDPOINT: &str = "/movie/popular";

/// Fetches raw TMDB listings through an [`HttpTransport`].
pub struct TmdbMovieSource<T: ?Sized> {
    transport: Arc<T>,
}

impl<T: ?Sized> Clone for TmdbMovieSource<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> TmdbMovieSource<T>
where
    T: HttpTransport + ?Sized,
{
    /// Create a source over a shared transport.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetch and decode one page of the popular listing.
    ///
    /// # Errors
    ///
    /// Transport failures are mapped onto [`MovieRepositoryError`]; bodies
    /// that are not a TMDB listing yield [`MovieRepositoryError::Decode`].
    pub async fn popular_movies(
        &self,
        page: PageNumber,
    ) -> Result<PopularMoviesDto, MovieRepositoryError> {
        let request = TransportRequest::get(POPULAR_MOVIES_ENDPOINT).with_query("page", page);
        debug!(endpoint = POPULAR_MOVIES_ENDPOINT, page = page.get(), "fetching popular movies");

        let body = self
            .transport
            .get(&request)
            .await
            .map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|error| {
            MovieRepositoryError::decode(format!("invalid popular movies payload: {error}"))
        })
    }
}

fn map_transport_error(error: TransportError) -> MovieRepositoryError {
    match error {
        TransportError::Transport { message } => MovieRepositoryError::transport(message),
        TransportError::Timeout { message } => MovieRepositoryError::timeout(message),
        TransportError::RateLimited { message } => MovieRepositoryError::rate_limited(message),
        TransportError::Status { status, message } => {
            MovieRepositoryError::upstream(status, message)
        }
        TransportError::InvalidRequest { message } => {
            MovieRepositoryError::invalid_request(message)
        }
    }
}
