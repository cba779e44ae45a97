//! Image URL resolution for catalogue artwork.

/// TMDB's public image host.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Rendition sizes served by the image host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    Poster,
    Backdrop,
    Profile,
    Original,
}

impl ImageSize {
    /// Path segment naming the rendition.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Poster => "w500",
            Self::Backdrop => "w1280",
            Self::Profile => "w185",
            Self::Original => "original",
        }
    }
}

/// Turns opaque artwork paths into absolute URLs.
///
/// # Examples
/// ```
/// use popular_movies::inbound::presentation::{ImageSize, ImageUrlBuilder};
///
/// let images = ImageUrlBuilder::new("https://image.tmdb.org/t/p/");
/// assert_eq!(
///     images.resolve(Some("/poster.jpg"), ImageSize::Poster).as_deref(),
///     Some("https://image.tmdb.org/t/p/w500/poster.jpg"),
/// );
/// assert_eq!(images.resolve(None, ImageSize::Poster), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed);
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` at `size`.
    ///
    /// Missing or blank paths yield `None`. Paths that are already absolute
    /// `http(s)` URLs are returned unchanged.
    pub fn resolve(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let relative = path.map(str::trim).filter(|raw| !raw.is_empty())?;
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return Some(relative.to_owned());
        }
        let separator = if relative.starts_with('/') { "" } else { "/" };
        Some(format!(
            "{}/{}{separator}{relative}",
            self.base_url,
            size.segment()
        ))
    }

    /// Resolve a poster path at [`ImageSize::Poster`].
    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.resolve(path, ImageSize::Poster)
    }
}
