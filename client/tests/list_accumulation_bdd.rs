//! Behaviour tests for incremental loading of the popular movies list.
//!
//! Scenarios run against the fixture catalogue through the real use case, so
//! page sizes, totals and ordering match what the binary shows offline.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use popular_movies::domain::ports::{
    FixtureMovieRepository, MovieRepository, MovieRepositoryError, PopularMoviesQuery,
};
use popular_movies::domain::{Error, ErrorCode, Movie, Page, PageNumber, PopularMoviesService};
use popular_movies::inbound::list::{ListOperation, MovieListController, PendingLoad};
use popular_movies::inbound::presentation::{
    DisplayList, DisplayMovie, ImageUrlBuilder, RatingBadge,
};
use popular_movies::outbound::tmdb::MovieDto;
use popular_movies::outbound::tmdb::mapper::to_domain_movie;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::{Builder, Runtime};

const PLACEHOLDER: &str = "/assets/poster-placeholder.svg";

/// Fixture repository that counts calls and can fail selected pages.
#[derive(Default)]
struct ScriptedRepository {
    inner: FixtureMovieRepository,
    calls: AtomicUsize,
    failing_pages: Mutex<HashSet<u32>>,
}

impl ScriptedRepository {
    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail_page(&self, page: u32) {
        self.failing_pages
            .lock()
            .expect("failing pages mutex")
            .insert(page);
    }

    fn recover(&self) {
        self.failing_pages
            .lock()
            .expect("failing pages mutex")
            .clear();
    }
}

#[async_trait]
impl MovieRepository for ScriptedRepository {
    async fn popular_movies(
        &self,
        page: PageNumber,
    ) -> Result<Page<Movie>, MovieRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failing_pages
            .lock()
            .expect("failing pages mutex")
            .contains(&page.get());
        if failing {
            return Err(MovieRepositoryError::transport("connection reset"));
        }
        self.inner.popular_movies(page).await
    }
}

struct ListWorld {
    runtime: Runtime,
    repository: Arc<ScriptedRepository>,
    query: Arc<dyn PopularMoviesQuery>,
    controller: RefCell<MovieListController>,
    pending: RefCell<Option<PendingLoad>>,
    last_issued: RefCell<Option<bool>>,
    fetched: RefCell<Option<Result<Page<Movie>, Error>>>,
    card: RefCell<Option<DisplayMovie>>,
}

impl ListWorld {
    fn new() -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("create runtime");
        let repository = Arc::new(ScriptedRepository::default());
        let query: Arc<dyn PopularMoviesQuery> =
            Arc::new(PopularMoviesService::new(Arc::clone(&repository)));
        let controller = MovieListController::new(Arc::clone(&query));
        Self {
            runtime,
            repository,
            query,
            controller: RefCell::new(controller),
            pending: RefCell::new(None),
            last_issued: RefCell::new(None),
            fetched: RefCell::new(None),
            card: RefCell::new(None),
        }
    }

    fn run(&self, operation: ListOperation) -> bool {
        let mut controller = self.controller.borrow_mut();
        let issued = self.runtime.block_on(async {
            match operation {
                ListOperation::LoadInitial => controller.load_initial().await,
                ListOperation::LoadNextPage => controller.load_next_page().await,
                ListOperation::Refresh => controller.refresh().await,
            }
        });
        *self.last_issued.borrow_mut() = Some(issued);
        issued
    }

    fn display(&self) -> DisplayList {
        let controller = self.controller.borrow();
        DisplayList::project(controller.state(), &ImageUrlBuilder::default(), PLACEHOLDER)
    }

    fn map_record(&self, score: f64, poster_path: Option<String>) {
        let record = MovieDto {
            id: 42,
            title: "Catalogue record".to_owned(),
            overview: String::new(),
            release_date: "2019-05-30".to_owned(),
            poster_path,
            vote_average: score,
        };
        let movie = to_domain_movie(record);
        let card = DisplayMovie::project(&movie, &ImageUrlBuilder::default(), PLACEHOLDER);
        *self.card.borrow_mut() = Some(card);
    }

    fn mapped_card(&self) -> DisplayMovie {
        self.card
            .borrow()
            .clone()
            .expect("a record should have been mapped")
    }

    fn fetched_page(&self) -> Page<Movie> {
        self.fetched
            .borrow()
            .clone()
            .expect("a page should have been fetched")
            .expect("the fetch should succeed")
    }
}

#[fixture]
fn world() -> ListWorld {
    ListWorld::new()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("the fixture catalogue of {count} movies")]
fn the_fixture_catalogue(world: &ListWorld, count: usize) {
    assert_eq!(world.repository.inner.len(), count);
}

#[given("the list has loaded {pages} pages")]
fn the_list_has_loaded_pages(world: &ListWorld, pages: usize) {
    assert!(world.run(ListOperation::LoadInitial));
    for _ in 1..pages {
        assert!(world.run(ListOperation::LoadNextPage));
    }
}

#[given("the catalogue fails for page {page}")]
fn the_catalogue_fails_for_page(world: &ListWorld, page: u32) {
    world.repository.fail_page(page);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the list loads its first page")]
fn the_list_loads_its_first_page(world: &ListWorld) {
    assert!(world.run(ListOperation::LoadInitial));
}

#[when("the next page is loaded")]
fn the_next_page_is_loaded(world: &ListWorld) {
    assert!(world.run(ListOperation::LoadNextPage));
}

#[when("the next page is requested again")]
fn the_next_page_is_requested_again(world: &ListWorld) {
    world.run(ListOperation::LoadNextPage);
}

#[when("the list is refreshed")]
fn the_list_is_refreshed(world: &ListWorld) {
    assert!(world.run(ListOperation::Refresh));
}

#[when("a next page request is started")]
fn a_next_page_request_is_started(world: &ListWorld) {
    let pending = world
        .controller
        .borrow_mut()
        .begin(ListOperation::LoadNextPage)
        .expect("next page should be allowed");
    *world.pending.borrow_mut() = Some(pending);
}

#[when("the pending request completes")]
fn the_pending_request_completes(world: &ListWorld) {
    let pending = world
        .pending
        .borrow_mut()
        .take()
        .expect("a request should be pending");
    let mut controller = world.controller.borrow_mut();
    let result = world.runtime.block_on(controller.fetch(&pending));
    controller.finish(pending, result);
}

#[when("a refresh completes before it")]
fn a_refresh_completes_before_it(world: &ListWorld) {
    assert!(world.run(ListOperation::Refresh));
}

#[when("page {page} is fetched directly")]
fn page_is_fetched_directly(world: &ListWorld, page: i64) {
    let result = world.runtime.block_on(world.query.popular_movies(page));
    *world.fetched.borrow_mut() = Some(result);
}

#[when("a catalogue record rated {score} with poster {path} is mapped to a card")]
fn a_record_with_a_poster_is_mapped(world: &ListWorld, score: f64, path: String) {
    world.map_record(score, Some(path));
}

#[when("a catalogue record rated {score} without a poster is mapped to a card")]
fn a_record_without_a_poster_is_mapped(world: &ListWorld, score: f64) {
    world.map_record(score, None);
}

#[when("the catalogue recovers")]
fn the_catalogue_recovers(world: &ListWorld) {
    world.repository.recover();
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the list shows {count} movies from page {page}")]
fn the_list_shows_movies_from_page(world: &ListWorld, count: usize, page: u32) {
    let list = world.display();
    assert_eq!(list.items.len(), count);
    assert_eq!(list.current_page, page);
    assert_eq!(list.total_pages, 3);
}

#[then("another page is available")]
fn another_page_is_available(world: &ListWorld) {
    assert!(world.display().has_next_page);
}

#[then("no further page is available")]
fn no_further_page_is_available(world: &ListWorld) {
    assert!(!world.display().has_next_page);
}

#[then("the request is ignored")]
fn the_request_is_ignored(world: &ListWorld) {
    assert_eq!(*world.last_issued.borrow(), Some(false));
}

#[then("the list is not loading")]
fn the_list_is_not_loading(world: &ListWorld) {
    assert!(!world.display().loading);
}

#[then("the fetched page is empty")]
fn the_fetched_page_is_empty(world: &ListWorld) {
    assert!(world.fetched_page().is_empty());
}

#[then("the fetched page reports {pages} pages and {total} movies")]
fn the_fetched_page_reports_totals(world: &ListWorld, pages: u32, total: u64) {
    let page = world.fetched_page();
    assert_eq!(page.total_pages(), pages);
    assert_eq!(page.total_results(), total);
}

#[then("the fetch fails with an invalid request")]
fn the_fetch_fails_with_an_invalid_request(world: &ListWorld) {
    let fetched = world.fetched.borrow();
    let error = fetched
        .as_ref()
        .expect("a fetch should have run")
        .as_ref()
        .expect_err("the fetch should fail");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[then("the repository was not called")]
fn the_repository_was_not_called(world: &ListWorld) {
    assert_eq!(world.repository.call_count(), 0);
}

#[then("the list reports a connection error")]
fn the_list_reports_a_connection_error(world: &ListWorld) {
    let error = world.display().error.expect("the list should show an error");
    assert!(error.contains("connection reset"), "unexpected error: {error}");
}

#[then("the list has no error")]
fn the_list_has_no_error(world: &ListWorld) {
    assert_eq!(world.display().error, None);
}

fn badge_named(name: &str) -> RatingBadge {
    match name {
        "top-rated" => RatingBadge::TopRated,
        "recommended" => RatingBadge::Recommended,
        other => panic!("unknown badge {other}"),
    }
}

fn card_for(world: &ListWorld, id: i64) -> DisplayMovie {
    world
        .display()
        .items
        .into_iter()
        .find(|card| card.id == id)
        .expect("movie should be listed")
}

#[then("movie {id} is shown rated {rating} with a {badge} badge")]
fn movie_is_shown_with_a_badge(world: &ListWorld, id: i64, rating: String, badge: String) {
    let card = card_for(world, id);
    assert_eq!(card.formatted_rating, rating);
    assert_eq!(card.rating_badge, Some(badge_named(&badge)));
}

#[then("movie {id} is shown rated {rating} without a badge")]
fn movie_is_shown_without_a_badge(world: &ListWorld, id: i64, rating: String) {
    let card = card_for(world, id);
    assert_eq!(card.formatted_rating, rating);
    assert_eq!(card.rating_badge, None);
}

#[then("movie {id} uses the poster placeholder")]
fn movie_uses_the_poster_placeholder(world: &ListWorld, id: i64) {
    assert_eq!(card_for(world, id).poster_url, PLACEHOLDER);
}

#[then("the card is rated {rating} with a {badge} badge")]
fn the_card_has_a_badge(world: &ListWorld, rating: String, badge: String) {
    let card = world.mapped_card();
    assert_eq!(card.formatted_rating, rating);
    assert_eq!(card.rating_badge, Some(badge_named(&badge)));
}

#[then("the card is rated {rating} without a badge")]
fn the_card_has_no_badge(world: &ListWorld, rating: String) {
    let card = world.mapped_card();
    assert_eq!(card.formatted_rating, rating);
    assert_eq!(card.rating_badge, None);
}

#[then("the card poster is {url}")]
fn the_card_poster_is(world: &ListWorld, url: String) {
    assert_eq!(world.mapped_card().poster_url, url);
}

#[then("the card uses the poster placeholder")]
fn the_card_uses_the_poster_placeholder(world: &ListWorld) {
    assert_eq!(world.mapped_card().poster_url, PLACEHOLDER);
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Walking the fixture catalogue page by page"
)]
fn walking_the_fixture_catalogue(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Refresh replaces the accumulated movies"
)]
fn refresh_replaces_the_accumulated_movies(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Loading more while a request is pending is ignored"
)]
fn loading_more_while_pending_is_ignored(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "A slow append cannot overwrite a refresh"
)]
fn a_slow_append_cannot_overwrite_a_refresh(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "A page past the end is empty"
)]
fn a_page_past_the_end_is_empty(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Pages below one are rejected before the repository"
)]
fn pages_below_one_are_rejected(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "A failed page keeps the accumulated movies"
)]
fn a_failed_page_keeps_the_accumulated_movies(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Display cards follow the rating thresholds"
)]
fn display_cards_follow_the_rating_thresholds(world: ListWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/list_accumulation.feature",
    name = "Raw catalogue records become display cards"
)]
fn raw_catalogue_records_become_display_cards(world: ListWorld) {
    drop(world);
}
