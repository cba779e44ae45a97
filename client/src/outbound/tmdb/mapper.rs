//! Conversion from TMDB payloads into domain values.
//!
//! Both functions are total: malformed dates and out-of-range ratings are
//! carried through unchanged and left for callers to judge.

use pagination::Page;

use super::dto::{MovieDto, PopularMoviesDto};
use crate::domain::{Movie, MovieDraft, ReleaseDate};

/// Map one TMDB result into a [`Movie`].
pub fn to_domain_movie(dto: MovieDto) -> Movie {
    Movie::new(MovieDraft {
        id: dto.id,
        title: dto.title,
        overview: dto.overview,
        release_date: ReleaseDate::parse(&dto.release_date),
        poster_path: dto.poster_path,
        vote_average: dto.vote_average,
    })
}

/// Map a TMDB listing into a domain page, keeping result order and copying
/// the pagination counters verbatim.
pub fn to_domain_page(dto: PopularMoviesDto) -> Page<Movie> {
    let PopularMoviesDto {
        page,
        results,
        total_pages,
        total_results,
    } = dto;
    let items = results.into_iter().map(to_domain_movie).collect();
    Page::new(page, items, total_pages, total_results)
}

#[cfg(test)]
mod tests {
    //! Field correspondence between TMDB payloads and domain movies.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn parasite() -> MovieDto {
        MovieDto {
            id: 496_243,
            title: "Parasite".to_owned(),
            overview: "A poor family schemes its way into a wealthy household.".to_owned(),
            release_date: "2019-05-30".to_owned(),
            poster_path: Some("/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg".to_owned()),
            vote_average: 8.5,
        }
    }

    #[rstest]
    fn maps_fields_by_name(parasite: MovieDto) {
        let movie = to_domain_movie(parasite);

        assert_eq!(movie.id(), 496_243);
        assert_eq!(movie.title(), "Parasite");
        assert_eq!(
            movie.overview(),
            "A poor family schemes its way into a wealthy household."
        );
        assert_eq!(movie.release_date().year(), Some(2019));
        assert_eq!(movie.poster_path(), Some("/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg"));
        assert!((movie.vote_average() - 8.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn passes_malformed_values_through(parasite: MovieDto) {
        let dto = MovieDto {
            release_date: "someday".to_owned(),
            poster_path: None,
            vote_average: 11.0,
            ..parasite
        };

        let movie = to_domain_movie(dto);

        assert_eq!(movie.release_date(), &ReleaseDate::Unparsed("someday".to_owned()));
        assert_eq!(movie.poster_path(), None);
        assert!((movie.vote_average() - 11.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn keeps_result_order_and_counters(parasite: MovieDto) {
        let second = MovieDto {
            id: 670,
            title: "Oldboy".to_owned(),
            ..parasite.clone()
        };
        let dto = PopularMoviesDto {
            page: 4,
            results: vec![parasite, second],
            total_pages: 9,
            total_results: 172,
        };

        let page = to_domain_page(dto);

        assert_eq!(page.page(), 4);
        assert_eq!(page.total_pages(), 9);
        assert_eq!(page.total_results(), 172);
        let ids: Vec<i64> = page.items().iter().map(Movie::id).collect();
        assert_eq!(ids, vec![496_243, 670]);
    }

    #[rstest]
    fn empty_listings_stay_empty() {
        let page = to_domain_page(PopularMoviesDto {
            page: 999,
            results: Vec::new(),
            total_pages: 3,
            total_results: 15,
        });

        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 3);
    }
}
