// Render payloads built from catalog records. Pure and infallible: every
// optional field has a fallback, so a half-empty record still renders.

use chrono::Datelike;

use crate::action::Action;
use crate::api::images::{title_placeholder, ImageSize, ImageUrls};
use crate::api::models::{CatalogItem, MediaKind};

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const NO_RATING: &str = "N/A";
pub const NO_OVERVIEW: &str = "No description available.";
pub const MATCH_BADGE: &str = "98% Match";
pub const ELLIPSIS: &str = "...";

/// Everything a row needs to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPayload {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub image_url: String,
    /// Used when `image_url` fails to load.
    pub fallback_image_url: String,
    pub year: String,
    pub rating: String,
}

/// Fixed-shape placeholder shown while a row is loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonPayload {
    pub title_width: u16,
    pub meta_width: u16,
}

impl Default for SkeletonPayload {
    fn default() -> Self {
        Self {
            title_width: 12,
            meta_width: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPayload {
    pub title: String,
    pub backdrop_url: String,
    pub overview: String,
    pub year: String,
    pub rating: String,
    /// `"<n> min"`, or empty.
    pub runtime: String,
    /// Present only once a trailer has resolved.
    pub trailer_url: Option<String>,
}

impl DetailPayload {
    pub fn with_trailer(mut self, trailer_url: Option<String>) -> Self {
        self.trailer_url = trailer_url;
        self
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer_url.is_some()
    }

    pub fn meta_line(&self) -> String {
        meta_line(&self.year, &self.rating, &self.runtime)
    }
}

/// The rotating banner above the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPayload {
    pub item: CatalogItem,
    pub title: String,
    pub backdrop_url: String,
    pub overview: String,
    pub year: String,
    pub rating: String,
    pub runtime: String,
    pub match_badge: &'static str,
}

impl HeroPayload {
    pub fn play_action(&self) -> Action {
        Action::OpenDetail(self.item.clone())
    }

    pub fn more_info_action(&self) -> Action {
        Action::OpenDetail(self.item.clone())
    }

    pub fn meta_line(&self) -> String {
        meta_line(&self.year, &self.rating, &self.runtime)
    }
}

pub fn display_title(item: &CatalogItem) -> String {
    item.title
        .clone()
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Four-digit year, or empty when the record has no date.
pub fn display_year(item: &CatalogItem) -> String {
    item.release_date
        .map(|d| d.year().to_string())
        .unwrap_or_default()
}

/// One decimal place, or `"N/A"`.
pub fn display_rating(item: &CatalogItem) -> String {
    match item.vote_average {
        Some(v) if v.is_finite() && v > 0.0 => format!("{:.1}", v),
        _ => NO_RATING.to_string(),
    }
}

pub fn display_runtime(item: &CatalogItem) -> String {
    match item.runtime {
        Some(m) if m > 0 => format!("{} min", m),
        _ => String::new(),
    }
}

pub fn card(item: &CatalogItem, images: &ImageUrls) -> CardPayload {
    let title = display_title(item);
    CardPayload {
        id: item.id,
        kind: item.kind,
        image_url: images.url(item.poster_path.as_deref(), ImageSize::Poster),
        fallback_image_url: title_placeholder(&title),
        year: display_year(item),
        rating: display_rating(item),
        title,
    }
}

pub fn skeleton() -> SkeletonPayload {
    SkeletonPayload::default()
}

pub fn detail(item: &CatalogItem, images: &ImageUrls) -> DetailPayload {
    let backdrop = item.backdrop_path.as_deref().or(item.poster_path.as_deref());
    DetailPayload {
        title: display_title(item),
        backdrop_url: images.url(backdrop, ImageSize::Backdrop),
        overview: item
            .overview
            .clone()
            .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        year: display_year(item),
        rating: display_rating(item),
        runtime: display_runtime(item),
        trailer_url: None,
    }
}

pub fn hero(item: &CatalogItem, images: &ImageUrls) -> HeroPayload {
    HeroPayload {
        item: item.clone(),
        title: display_title(item),
        backdrop_url: images.url(item.backdrop_path.as_deref(), ImageSize::Backdrop),
        overview: item
            .overview
            .clone()
            .unwrap_or_else(|| NO_OVERVIEW.to_string()),
        year: display_year(item),
        rating: display_rating(item),
        runtime: display_runtime(item),
        match_badge: MATCH_BADGE,
    }
}

/// `year · ★ rating · runtime`, skipping whatever is missing.
pub fn meta_line(year: &str, rating: &str, runtime: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !year.is_empty() {
        parts.push(year.to_string());
    }
    if !rating.is_empty() && rating != NO_RATING {
        parts.push(format!("★ {}", rating));
    }
    if !runtime.is_empty() {
        parts.push(runtime.to_string());
    }
    parts.join(" · ")
}

/// Keep at most `max_len` chars, appending an ellipsis when anything was cut.
/// Counts `char`s, so multi-byte text is never split mid code point.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}
