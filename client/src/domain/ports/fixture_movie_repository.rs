//! Deterministic in-memory movie repository.
//!
//! Serves a fixed listing in pages of five so list behaviour can be exercised
//! offline and in tests.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber, paginate};

use super::{MovieRepository, MovieRepositoryError};
use crate::domain::{Movie, MovieDraft, ReleaseDate};

/// Page size used by the fixture.
pub const FIXTURE_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => panic!("fixture page size must be non-zero"),
};

struct FixtureRow {
    id: i64,
    title: &'static str,
    overview: &'static str,
    release_date: &'static str,
    poster_path: Option<&'static str>,
    vote_average: f64,
}

const FIXTURE_ROWS: [FixtureRow; 15] = [
    FixtureRow {
        id: 1,
        title: "Parasite",
        overview: "Unemployed and broke, the Kim family finally catches a break when the son lands a tutoring job with a wealthy household.",
        release_date: "2019-05-30",
        poster_path: Some("https://picsum.photos/id/237/200/300"),
        vote_average: 9.5,
    },
    FixtureRow {
        id: 2,
        title: "Oldboy",
        overview: "Released after fifteen years of unexplained imprisonment, Oh Dae-su hunts for the man who locked him away.",
        release_date: "2003-11-21",
        poster_path: Some("https://picsum.photos/id/238/200/300"),
        vote_average: 9.2,
    },
    FixtureRow {
        id: 3,
        title: "Memories of Murder",
        overview: "Two rural detectives chase an elusive serial killer in 1986 Gyeonggi Province.",
        release_date: "2003-05-02",
        poster_path: Some("https://picsum.photos/id/239/200/300"),
        vote_average: 8.9,
    },
    FixtureRow {
        id: 4,
        title: "Taegukgi",
        overview: "Two brothers are drafted into the Korean War and pulled apart by its brutality.",
        release_date: "2004-02-05",
        poster_path: Some("https://picsum.photos/id/240/200/300"),
        vote_average: 8.8,
    },
    FixtureRow {
        id: 5,
        title: "Burning",
        overview: "A part-time worker reconnects with a childhood friend and waits for her return from a trip to Africa.",
        release_date: "2018-05-17",
        poster_path: None,
        vote_average: 8.5,
    },
    FixtureRow {
        id: 6,
        title: "The Wailing",
        overview: "After a stranger arrives in a small village, a string of mysterious illnesses sends a police officer searching for the truth.",
        release_date: "2016-05-12",
        poster_path: Some("https://picsum.photos/id/241/200/300"),
        vote_average: 7.8,
    },
    FixtureRow {
        id: 7,
        title: "The Handmaiden",
        overview: "In occupied Korea, a con man plants a maid in an heiress's household to help him seduce her.",
        release_date: "2016-06-01",
        poster_path: Some("https://picsum.photos/id/242/200/300"),
        vote_average: 7.9,
    },
    FixtureRow {
        id: 8,
        title: "Along with the Gods: The Two Worlds",
        overview: "A firefighter killed on duty faces seven trials in the afterlife as he looks back on his life.",
        release_date: "2017-12-20",
        poster_path: Some("https://picsum.photos/id/243/200/300"),
        vote_average: 7.7,
    },
    FixtureRow {
        id: 9,
        title: "Extreme Job",
        overview: "A narcotics squad opens a fried chicken restaurant as a front to stake out a drug ring.",
        release_date: "2019-01-23",
        poster_path: Some("https://picsum.photos/id/244/200/300"),
        vote_average: 7.6,
    },
    FixtureRow {
        id: 10,
        title: "Veteran",
        overview: "A hard-nosed detective takes on the arrogant heir of a powerful conglomerate.",
        release_date: "2015-08-05",
        poster_path: Some("https://picsum.photos/id/245/200/300"),
        vote_average: 7.4,
    },
    FixtureRow {
        id: 11,
        title: "Real",
        overview: "The owner of a casino empire confronts a rival who may be another side of himself.",
        release_date: "2017-06-28",
        poster_path: Some("https://picsum.photos/id/246/200/300"),
        vote_average: 3.6,
    },
    FixtureRow {
        id: 12,
        title: "Operation Chromite",
        overview: "A covert team prepares the ground for the landing at Incheon that turned the Korean War.",
        release_date: "2016-07-27",
        poster_path: None,
        vote_average: 4.8,
    },
    FixtureRow {
        id: 13,
        title: "The Technicians",
        overview: "A crew of specialists gathers to steal a legendary diamond.",
        release_date: "2014-12-24",
        poster_path: Some("https://picsum.photos/id/247/200/300"),
        vote_average: 5.2,
    },
    FixtureRow {
        id: 14,
        title: "Mr. Go",
        overview: "A gorilla raised in a Chinese circus becomes a star of the Korean baseball league.",
        release_date: "2013-07-17",
        poster_path: Some("https://picsum.photos/id/248/200/300"),
        vote_average: 5.5,
    },
    FixtureRow {
        id: 15,
        title: "Sector 7",
        overview: "The crew of an offshore oil rig fights a creature that rises from the deep.",
        release_date: "2011-08-04",
        poster_path: Some("https://picsum.photos/id/249/200/300"),
        vote_average: 6.1,
    },
];

/// Build the fixed fifteen-movie listing served by the default fixture.
pub fn fixture_movies() -> Vec<Movie> {
    FIXTURE_ROWS
        .iter()
        .map(|row| {
            Movie::new(MovieDraft {
                id: row.id,
                title: row.title.to_owned(),
                overview: row.overview.to_owned(),
                release_date: ReleaseDate::parse(row.release_date),
                poster_path: row.poster_path.map(str::to_owned),
                vote_average: row.vote_average,
            })
        })
        .collect()
}

/// Fixture implementation paging through a fixed listing.
///
/// Pages past the end return an empty page with the listing's totals.
#[derive(Debug, Clone)]
pub struct FixtureMovieRepository {
    movies: Arc<[Movie]>,
}

impl FixtureMovieRepository {
    /// Serve a custom listing instead of the default fifteen movies.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: movies.into(),
        }
    }

    /// Number of movies in the listing.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for FixtureMovieRepository {
    fn default() -> Self {
        Self::with_movies(fixture_movies())
    }
}

#[async_trait]
impl MovieRepository for FixtureMovieRepository {
    async fn popular_movies(
        &self,
        page: PageNumber,
    ) -> Result<Page<Movie>, MovieRepositoryError> {
        Ok(paginate(&*self.movies, page, FIXTURE_PAGE_SIZE))
    }
}
