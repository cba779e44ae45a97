//! Text rendering of a [`DisplayList`].

use std::fmt;

use crate::inbound::presentation::{DisplayList, DisplayMovie};

/// Commands accepted by the interactive client.
pub const COMMAND_HINT: &str = "[n]ext page  [r]efresh  [q]uit";

const OVERVIEW_PREVIEW_CHARS: usize = 120;

/// Render the whole list view: cards, then status and footer lines.
///
/// Cards stay visible when the latest request failed; the error banner is
/// printed beneath them with a retry hint.
pub fn render_list(list: &DisplayList) -> String {
    ListView(list).to_string()
}

struct ListView<'a>(&'a DisplayList);

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.0;
        if list.items.is_empty() && !list.loading && list.error.is_none() {
            writeln!(f, "No movies to show.")?;
        }
        for (index, movie) in list.items.iter().enumerate() {
            write_card(f, index + 1, movie)?;
        }
        if let Some(error) = &list.error {
            writeln!(f, "! {error}")?;
            writeln!(f, "! Press r to retry.")?;
        }
        if list.loading {
            writeln!(f, "Loading...")
        } else if list.has_next_page {
            writeln!(
                f,
                "Page {} of {} ({} movies). Press n to load more.",
                list.current_page, list.total_pages, list.total_results
            )
        } else if list.items.is_empty() {
            Ok(())
        } else {
            writeln!(f, "All {} movies loaded.", list.items.len())
        }
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, position: usize, movie: &DisplayMovie) -> fmt::Result {
    let year = movie
        .release_year
        .map_or_else(|| movie.release_date.clone(), |year| year.to_string());
    write!(
        f,
        "{position:>3}. {} ({year})  * {} [{}]",
        movie.title,
        movie.formatted_rating,
        movie.rating_color.css_class()
    )?;
    if let Some(badge) = movie.rating_badge {
        write!(f, "  <{badge}>")?;
    }
    writeln!(f)?;
    if !movie.overview.is_empty() {
        writeln!(f, "     {}", preview(&movie.overview))?;
    }
    writeln!(f, "     {}", movie.poster_url)
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(OVERVIEW_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
