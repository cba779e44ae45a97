//! Composition root.
//!
//! Builds the popular-movies query graph once from [`CatalogueSettings`] and
//! hands it to callers as a trait object. Components never pick their own
//! repository.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{CatalogueSettings, ConfigError, RepositorySource};
use crate::domain::PopularMoviesService;
use crate::domain::ports::{FixtureMovieRepository, PopularMoviesQuery};
use crate::inbound::presentation::ImageUrlBuilder;
use crate::outbound::http::{ReqwestTransport, TransportSettings};
use crate::outbound::tmdb::TmdbMovieRepository;

/// Failures while assembling the client.
#[derive(Debug, Error)]
pub enum WiringError {
    /// Settings were invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build the popular-movies query selected by `settings`.
///
/// # Errors
///
/// Returns [`WiringError`] for invalid settings or when the HTTP client
/// cannot be created.
///
/// # Examples
/// ```
/// use popular_movies::config::CatalogueSettings;
/// use popular_movies::wiring::build_query;
///
/// let query = build_query(&CatalogueSettings::default()).expect("stub wiring");
/// # drop(query);
/// ```
pub fn build_query(
    settings: &CatalogueSettings,
) -> Result<Arc<dyn PopularMoviesQuery>, WiringError> {
    match settings.repository_source()? {
        RepositorySource::Stub => {
            info!(source = "stub", "using fixture movie catalogue");
            let repository = Arc::new(FixtureMovieRepository::default());
            Ok(Arc::new(PopularMoviesService::new(repository)))
        }
        RepositorySource::Tmdb => {
            let base_url = settings.base_url()?;
            let api_key = settings.api_key().ok_or(ConfigError::MissingApiKey)?;
            info!(source = "tmdb", %base_url, "using live movie catalogue");
            let transport_settings =
                TransportSettings::new(base_url, api_key).with_timeout(settings.timeout()?);
            let transport = Arc::new(ReqwestTransport::new(transport_settings)?);
            let repository = Arc::new(TmdbMovieRepository::new(transport));
            Ok(Arc::new(PopularMoviesService::new(repository)))
        }
    }
}

/// Image URL builder for the configured image host.
pub fn build_image_urls(settings: &CatalogueSettings) -> ImageUrlBuilder {
    ImageUrlBuilder::new(settings.image_base_url())
}
