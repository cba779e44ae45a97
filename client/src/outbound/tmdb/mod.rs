//! TMDB outbound adapters.
//!
//! [`TmdbMovieSource`] fetches the raw popular-movies listing through an
//! [`HttpTransport`](crate::outbound::http::HttpTransport), [`mapper`]
//! converts it into domain values, and [`TmdbMovieRepository`] composes the
//! two behind the `MovieRepository` port.

mod dto;
pub mod mapper;
mod repository;
mod source;

pub use dto::{MovieDto, PopularMoviesDto};
pub use repository::TmdbMovieRepository;
pub use source::{POPULAR_MOVIES_ENDPOINT, TmdbMovieSource};
