//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod fixture_movie_repository;
mod movie_repository;
mod popular_movies_query;

pub use fixture_movie_repository::{FIXTURE_PAGE_SIZE, FixtureMovieRepository, fixture_movies};
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
pub use movie_repository::{MovieRepository, MovieRepositoryError};
#[cfg(test)]
pub use popular_movies_query::MockPopularMoviesQuery;
pub use popular_movies_query::PopularMoviesQuery;
