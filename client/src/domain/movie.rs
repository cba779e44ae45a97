//! Movie entity.

use serde::Serialize;

use super::ReleaseDate;

const HIGH_RATING_THRESHOLD: f64 = 8.0;

/// Input for constructing a [`Movie`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: ReleaseDate,
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

/// One catalogue entry.
///
/// Movies are immutable once built and carry whatever the source reported:
/// ratings are documented as `0.0..=10.0` but are not clamped here.
///
/// # Examples
/// ```
/// use popular_movies::domain::{Movie, MovieDraft, ReleaseDate};
///
/// let movie = Movie::new(MovieDraft {
///     id: 496243,
///     title: "Parasite".to_owned(),
///     overview: "A poor family schemes its way into a wealthy household.".to_owned(),
///     release_date: ReleaseDate::parse("2019-05-30"),
///     poster_path: Some("/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg".to_owned()),
///     vote_average: 8.5,
/// });
/// assert!(movie.is_high_rated());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    id: i64,
    title: String,
    overview: String,
    release_date: ReleaseDate,
    poster_path: Option<String>,
    vote_average: f64,
}

impl Movie {
    /// Build a movie from its draft.
    pub fn new(draft: MovieDraft) -> Self {
        let MovieDraft {
            id,
            title,
            overview,
            release_date,
            poster_path,
            vote_average,
        } = draft;
        Self {
            id,
            title,
            overview,
            release_date,
            poster_path,
            vote_average,
        }
    }

    /// Catalogue identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Plot summary.
    pub fn overview(&self) -> &str {
        self.overview.as_str()
    }

    pub fn release_date(&self) -> &ReleaseDate {
        &self.release_date
    }

    /// Opaque poster path, resolved to a URL by the presentation layer.
    pub fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }

    /// Average audience rating.
    pub fn vote_average(&self) -> f64 {
        self.vote_average
    }

    /// Whether the rating is at least 8.0.
    pub fn is_high_rated(&self) -> bool {
        self.vote_average >= HIGH_RATING_THRESHOLD
    }
}

impl From<MovieDraft> for Movie {
    fn from(value: MovieDraft) -> Self {
        Self::new(value)
    }
}
