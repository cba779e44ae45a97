//! Card-level projection of a movie.

use std::fmt;

use serde::Serialize;

use super::image_url::ImageUrlBuilder;
use crate::domain::Movie;

const TOP_RATED_THRESHOLD: f64 = 8.0;
const RECOMMENDED_THRESHOLD: f64 = 7.0;
const AVERAGE_THRESHOLD: f64 = 5.0;

/// Highlight shown next to well-rated movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingBadge {
    TopRated,
    Recommended,
}

impl RatingBadge {
    /// Badge for `score`, if it earns one.
    pub fn for_score(score: f64) -> Option<Self> {
        if score >= TOP_RATED_THRESHOLD {
            Some(Self::TopRated)
        } else if score >= RECOMMENDED_THRESHOLD {
            Some(Self::Recommended)
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TopRated => "Top rated",
            Self::Recommended => "Recommended",
        }
    }
}

impl fmt::Display for RatingBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour bucket for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingColor {
    /// 8.0 and above.
    Excellent,
    /// 7.0 up to 8.0.
    Good,
    /// 5.0 up to 7.0.
    Average,
    /// Below 5.0.
    Poor,
}

impl RatingColor {
    pub fn for_score(score: f64) -> Self {
        if score >= TOP_RATED_THRESHOLD {
            Self::Excellent
        } else if score >= RECOMMENDED_THRESHOLD {
            Self::Good
        } else if score >= AVERAGE_THRESHOLD {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Stylesheet class for the bucket.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "rating-excellent",
            Self::Good => "rating-good",
            Self::Average => "rating-average",
            Self::Poor => "rating-poor",
        }
    }
}

/// Everything a movie card shows, derived from one [`Movie`].
///
/// # Examples
/// ```
/// use popular_movies::domain::{Movie, MovieDraft, ReleaseDate};
/// use popular_movies::inbound::presentation::{
///     DisplayMovie, ImageUrlBuilder, RatingBadge, RatingColor,
/// };
///
/// let movie = Movie::new(MovieDraft {
///     id: 1,
///     title: "Parasite".to_owned(),
///     overview: String::new(),
///     release_date: ReleaseDate::parse("2019-05-30"),
///     poster_path: None,
///     vote_average: 9.5,
/// });
/// let card = DisplayMovie::project(&movie, &ImageUrlBuilder::default(), "/placeholder.svg");
/// assert_eq!(card.formatted_rating, "9.5");
/// assert_eq!(card.rating_badge, Some(RatingBadge::TopRated));
/// assert_eq!(card.rating_color, RatingColor::Excellent);
/// assert_eq!(card.poster_url, "/placeholder.svg");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMovie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    /// ISO date, or the raw text when the source date did not parse.
    pub release_date: String,
    pub release_year: Option<i32>,
    pub vote_average: f64,
    /// Rating with exactly one decimal place.
    pub formatted_rating: String,
    pub rating_badge: Option<RatingBadge>,
    pub rating_color: RatingColor,
    /// Resolved poster, or the placeholder when the movie has none.
    pub poster_url: String,
}

impl DisplayMovie {
    pub fn project(movie: &Movie, images: &ImageUrlBuilder, placeholder: &str) -> Self {
        let score = movie.vote_average();
        Self {
            id: movie.id(),
            title: movie.title().to_owned(),
            overview: movie.overview().to_owned(),
            release_date: movie.release_date().to_string(),
            release_year: movie.release_date().year(),
            vote_average: score,
            formatted_rating: format!("{score:.1}"),
            rating_badge: RatingBadge::for_score(score),
            rating_color: RatingColor::for_score(score),
            poster_url: images
                .poster(movie.poster_path())
                .unwrap_or_else(|| placeholder.to_owned()),
        }
    }
}
