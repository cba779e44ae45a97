//! Drives one list view's state through the popular-movies query.
//!
//! The controller is built with the query port it should use; nothing is
//! looked up globally. The common path is [`MovieListController::load_initial`],
//! [`MovieListController::load_next_page`] and [`MovieListController::refresh`].
//! Callers that need to overlap requests can split each operation into
//! [`begin`](MovieListController::begin), [`fetch`](MovieListController::fetch)
//! and [`finish`](MovieListController::finish).

use std::sync::Arc;

use pagination::Page;
use tracing::debug;

use super::state::{Generation, ListEvent, ListOperation, ListState, LoadRequest, reduce};
use crate::domain::ports::PopularMoviesQuery;
use crate::domain::{Error, Movie};

/// A request that has been issued but not yet completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    generation: Generation,
    request: LoadRequest,
}

impl PendingLoad {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn request(&self) -> LoadRequest {
        self.request
    }
}

/// Owns the accumulated movie list for one view.
pub struct MovieListController {
    query: Arc<dyn PopularMoviesQuery>,
    state: ListState<Movie>,
}

impl MovieListController {
    /// Create a controller with an empty list.
    pub fn new(query: Arc<dyn PopularMoviesQuery>) -> Self {
        Self {
            query,
            state: ListState::new(),
        }
    }

    /// Current state for rendering.
    pub fn state(&self) -> &ListState<Movie> {
        &self.state
    }

    /// Load page one if nothing has been requested yet.
    ///
    /// Returns whether a request was issued.
    pub async fn load_initial(&mut self) -> bool {
        self.run(ListOperation::LoadInitial).await
    }

    /// Append the next page unless a request is in flight or the listing is
    /// exhausted.
    pub async fn load_next_page(&mut self) -> bool {
        self.run(ListOperation::LoadNextPage).await
    }

    /// Reload from page one, replacing the list once the page arrives.
    pub async fn refresh(&mut self) -> bool {
        self.run(ListOperation::Refresh).await
    }

    /// Issue the request for `operation` if its guard allows it.
    pub fn begin(&mut self, operation: ListOperation) -> Option<PendingLoad> {
        let Some(request) = self.state.plan(operation) else {
            debug!(?operation, "list operation ignored");
            return None;
        };
        self.apply(request.into());
        let generation = self.state.generation();
        debug!(
            ?operation,
            page = request.page.get(),
            generation = generation.get(),
            "list request issued"
        );
        Some(PendingLoad {
            generation,
            request,
        })
    }

    /// Run the query for a pending request. Does not touch the list state.
    ///
    /// # Errors
    ///
    /// Propagates the query's error unchanged.
    pub async fn fetch(&self, pending: &PendingLoad) -> Result<Page<Movie>, Error> {
        self.query
            .popular_movies(i64::from(pending.request.page.get()))
            .await
    }

    /// Apply the outcome of a pending request.
    ///
    /// Returns `false` when a newer request superseded `pending`, in which
    /// case the outcome is dropped.
    pub fn finish(&mut self, pending: PendingLoad, result: Result<Page<Movie>, Error>) -> bool {
        let generation = pending.generation;
        let accepted = self.state.is_awaiting(generation);
        if !accepted {
            debug!(generation = generation.get(), "stale list response dropped");
        }
        let event = match result {
            Ok(page) => ListEvent::Succeeded { generation, page },
            Err(error) => ListEvent::Failed {
                generation,
                message: error.to_string(),
            },
        };
        self.apply(event);
        accepted
    }

    async fn run(&mut self, operation: ListOperation) -> bool {
        let Some(pending) = self.begin(operation) else {
            return false;
        };
        let result = self.fetch(&pending).await;
        self.finish(pending, result);
        true
    }

    fn apply(&mut self, event: ListEvent<Movie>) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
