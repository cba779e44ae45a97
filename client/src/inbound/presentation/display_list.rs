//! List-level projection consumed by renderers.

use serde::Serialize;

use super::display_movie::DisplayMovie;
use super::image_url::ImageUrlBuilder;
use crate::domain::Movie;
use crate::inbound::list::ListState;

/// Render surface for one list view: projected cards plus pagination and
/// request status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    pub items: Vec<DisplayMovie>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl DisplayList {
    pub fn project(state: &ListState<Movie>, images: &ImageUrlBuilder, placeholder: &str) -> Self {
        Self {
            items: state
                .items()
                .iter()
                .map(|movie| DisplayMovie::project(movie, images, placeholder))
                .collect(),
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            total_results: state.total_results(),
            has_next_page: state.has_next_page(),
            has_previous_page: state.has_previous_page(),
            loading: state.is_loading(),
            error: state.error().map(str::to_owned),
        }
    }
}
