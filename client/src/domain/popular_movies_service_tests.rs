//! Tests for the popular movies service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{FixtureMovieRepository, MockMovieRepository, fixture_movies};

fn service_over_fixture() -> PopularMoviesService<FixtureMovieRepository> {
    PopularMoviesService::new(Arc::new(FixtureMovieRepository::default()))
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
#[tokio::test]
async fn rejects_pages_below_one_without_calling_the_repository(#[case] page: i64) {
    let mut repo = MockMovieRepository::new();
    repo.expect_popular_movies().times(0);

    let service = PopularMoviesService::new(Arc::new(repo));
    let error = service
        .popular_movies(page)
        .await
        .expect_err("page below one is invalid");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert!(
        error.message().starts_with("page number must be at least 1"),
        "unexpected message: {error}"
    );
}

#[rstest]
#[tokio::test]
async fn delegates_valid_pages_unchanged() {
    let expected = Page::new(2, fixture_movies().into_iter().skip(5).take(5).collect(), 3, 15);
    let returned = expected.clone();

    let mut repo = MockMovieRepository::new();
    repo.expect_popular_movies()
        .withf(|page| page.get() == 2)
        .times(1)
        .return_once(move |_| Ok(returned));

    let service = PopularMoviesService::new(Arc::new(repo));
    let page = service.popular_movies(2).await.expect("page loads");

    assert_eq!(page, expected);
}

#[rstest]
#[tokio::test]
async fn first_page_of_the_fixture_starts_with_the_top_rated_title() {
    let page = service_over_fixture()
        .popular_movies(1)
        .await
        .expect("page loads");

    assert_eq!(page.page(), 1);
    let first = page.items().first().expect("first movie");
    assert_eq!(first.title(), "Parasite");
    assert!(first.is_high_rated());
}

#[rstest]
#[tokio::test]
async fn out_of_range_page_is_empty_not_an_error() {
    let page = service_over_fixture()
        .popular_movies(999)
        .await
        .expect("page loads");

    assert_eq!(page.page(), 999);
    assert!(page.is_empty());
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_results(), 15);
}

#[rstest]
#[case(MovieRepositoryError::transport("connection reset"), ErrorCode::ServiceUnavailable)]
#[case(MovieRepositoryError::timeout("after 10000ms"), ErrorCode::Timeout)]
#[case(MovieRepositoryError::rate_limited("status 429"), ErrorCode::RateLimited)]
#[case(MovieRepositoryError::upstream(401_u16, "Invalid API key"), ErrorCode::UpstreamError)]
#[case(MovieRepositoryError::decode("missing field `results`"), ErrorCode::UpstreamError)]
#[case(MovieRepositoryError::invalid_request("bad endpoint"), ErrorCode::InternalError)]
#[tokio::test]
async fn maps_repository_failures_to_domain_codes(
    #[case] failure: MovieRepositoryError,
    #[case] expected: ErrorCode,
) {
    let expected_message = format!("TMDB API error: {failure}");
    let mut repo = MockMovieRepository::new();
    repo.expect_popular_movies()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = PopularMoviesService::new(Arc::new(repo));
    let error = service.popular_movies(1).await.expect_err("failure propagates");

    assert_eq!(error.code(), expected);
    assert_eq!(error.message(), expected_message);
}
