//! Display-ready projections of domain movies.
//!
//! Projections are recomputed from the domain values on every render and
//! never stored back into list state.

mod display_list;
mod display_movie;
mod image_url;

pub use display_list::DisplayList;
pub use display_movie::{DisplayMovie, RatingBadge, RatingColor};
pub use image_url::{DEFAULT_IMAGE_BASE_URL, ImageSize, ImageUrlBuilder};
