//! Domain primitives, ports, and services.
//!
//! Purpose: define the movie entity and the use case that fetches a page of
//! popular movies. Nothing here knows about HTTP, JSON, or terminals; adapters
//! reach the domain only through the traits in [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable failure category.
//! - Movie / MovieDraft — immutable catalogue entry.
//! - ReleaseDate — calendar date or the raw text the source supplied.
//! - PopularMoviesService — page-fetch use case behind `PopularMoviesQuery`.

pub mod error;
pub mod movie;
pub mod ports;
pub mod release_date;

mod popular_movies_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::movie::{Movie, MovieDraft};
pub use self::popular_movies_service::PopularMoviesService;
pub use self::release_date::ReleaseDate;
pub use pagination::{Page, PageNumber, PageNumberError};
