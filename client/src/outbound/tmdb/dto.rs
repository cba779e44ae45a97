//! DTOs for decoding TMDB JSON responses.
//!
//! Field names follow the TMDB wire format. Mapping into domain values lives
//! in [`super::mapper`].

use serde::Deserialize;

/// One entry of the `results` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// `YYYY-MM-DD`, or an empty string for unreleased titles.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

/// Envelope returned by `GET /movie/popular`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PopularMoviesDto {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieDto>,
    pub total_pages: u32,
    pub total_results: u64,
}
