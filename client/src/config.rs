//! Catalogue client configuration loaded via OrthoConfig.
//!
//! Every value can be supplied through `MOVIES_*` environment variables or a
//! configuration file. The timeout carries a loader default and the accessors
//! supply the rest, so an empty environment yields a client running against
//! the offline fixture.

use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::inbound::presentation::DEFAULT_IMAGE_BASE_URL;

/// TMDB's v3 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Poster shown for movies without artwork.
pub const DEFAULT_POSTER_PLACEHOLDER: &str = "/assets/poster-placeholder.svg";

/// Which repository implementation backs the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositorySource {
    /// Fixed in-memory listing.
    Stub,
    /// Live TMDB catalogue.
    Tmdb,
}

impl FromStr for RepositorySource {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stub" | "fixture" => Ok(Self::Stub),
            "tmdb" | "live" => Ok(Self::Tmdb),
            _ => Err(ConfigError::UnknownSource {
                value: value.to_owned(),
            }),
        }
    }
}

/// Configuration problems detected while resolving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `source` named an unsupported repository.
    #[error("unknown movie source `{value}` (expected `stub` or `tmdb`)")]
    UnknownSource {
        /// Rejected value.
        value: String,
    },
    /// The live repository was selected without credentials.
    #[error("the tmdb source requires MOVIES_API_KEY to be set")]
    MissingApiKey,
    /// A URL setting failed to parse.
    #[error("invalid {field}: {source}")]
    InvalidUrl {
        /// Setting name.
        field: &'static str,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The timeout was zero.
    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,
}

/// Settings controlling where movies come from and how they are shown.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOVIES")]
pub struct CatalogueSettings {
    /// Repository to use: `stub` or `tmdb`.
    pub source: Option<String>,
    /// TMDB API key.
    pub api_key: Option<String>,
    /// API root URL.
    pub base_url: Option<String>,
    /// Image host root URL.
    pub image_base_url: Option<String>,
    /// Per-request timeout in milliseconds.
    #[ortho_config(default = 10_000)]
    pub timeout_ms: u64,
    /// Poster URL used when a movie has no artwork.
    pub poster_placeholder: Option<String>,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            source: None,
            api_key: None,
            base_url: None,
            image_base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            poster_placeholder: None,
        }
    }
}

impl CatalogueSettings {
    /// Resolve the repository to use.
    ///
    /// Without an explicit `source` the live catalogue is chosen when an API
    /// key is configured, and the fixture otherwise.
    ///
    /// # Errors
    ///
    /// Fails for unknown source names and for `tmdb` without an API key.
    pub fn repository_source(&self) -> Result<RepositorySource, ConfigError> {
        let source = match self.source.as_deref() {
            Some(raw) => raw.parse()?,
            None if self.api_key().is_some() => RepositorySource::Tmdb,
            None => RepositorySource::Stub,
        };
        if source == RepositorySource::Tmdb && self.api_key().is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(source)
    }

    /// Configured API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// API root URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the configured value does not
    /// parse.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            field: "base_url",
            source,
        })
    }

    pub fn image_base_url(&self) -> &str {
        self.image_base_url
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_BASE_URL)
    }

    /// Per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero timeout.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        match self.timeout_ms {
            0 => Err(ConfigError::ZeroTimeout),
            millis => Ok(Duration::from_millis(millis)),
        }
    }

    pub fn poster_placeholder(&self) -> &str {
        self.poster_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_POSTER_PLACEHOLDER)
    }
}
