// src/api/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Media kind ──

/// Movie or TV show. Resolved once when a record is ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    /// Path segment used by the detail and video endpoints.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "tv",
        }
    }

    /// Map TMDB's `media_type` discriminator. `person` and unknown values yield `None`.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Show),
            _ => None,
        }
    }
}

// ── Wire types ──

/// Envelope of every list endpoint. Entries stay as raw JSON so one bad
/// record doesn't sink the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    pub results: Option<Vec<serde_json::Value>>,
}

/// A movie or show as returned by list, search and detail endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMedia {
    pub id: u64,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub runtime: Option<u32>,
    pub episode_run_time: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    pub key: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

// ── Normalized types ──

/// A movie or show ready for the presentation layer. Every field except
/// `id` and `kind` may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    pub kind: MediaKind,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<NaiveDate>,
    /// Minutes: movie runtime, or the first episode runtime for shows.
    pub runtime: Option<u32>,
}

impl CatalogItem {
    /// A bare record with every optional field absent.
    pub fn new(id: u64, kind: MediaKind) -> Self {
        Self {
            id,
            kind,
            title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
            release_date: None,
            runtime: None,
        }
    }
}

/// One entry of a video listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub key: String,
    pub site: String,
    /// "Trailer", "Teaser", "Featurette", ...
    pub category: String,
}

impl TmdbMedia {
    /// Explicit `media_type` wins, then the endpoint's hint, then whichever
    /// title field is present. People have no kind.
    pub fn resolve_kind(&self, hint: Option<MediaKind>) -> Option<MediaKind> {
        if let Some(media_type) = self.media_type.as_deref() {
            return MediaKind::from_media_type(media_type);
        }
        if hint.is_some() {
            return hint;
        }
        Some(if self.title.is_some() {
            MediaKind::Movie
        } else {
            MediaKind::Show
        })
    }

    pub fn into_item(self, hint: Option<MediaKind>) -> Option<CatalogItem> {
        let kind = self.resolve_kind(hint)?;
        let release_date =
            parse_date(self.release_date.as_deref()).or_else(|| parse_date(self.first_air_date.as_deref()));
        let runtime = self.runtime.filter(|&m| m > 0).or_else(|| {
            self.episode_run_time
                .as_ref()
                .and_then(|runs| runs.first().copied())
                .filter(|&m| m > 0)
        });

        Some(CatalogItem {
            id: self.id,
            kind,
            title: non_blank(self.title).or_else(|| non_blank(self.name)),
            overview: non_blank(self.overview),
            poster_path: non_blank(self.poster_path),
            backdrop_path: non_blank(self.backdrop_path),
            vote_average: self.vote_average.filter(|v| v.is_finite() && *v > 0.0),
            release_date,
            runtime,
        })
    }
}

impl TmdbVideo {
    pub fn into_video_ref(self) -> Option<VideoRef> {
        Some(VideoRef {
            key: non_blank(self.key)?,
            site: self.site.unwrap_or_default(),
            category: self.video_type.unwrap_or_default(),
        })
    }
}

/// TMDB dates are `YYYY-MM-DD`; it also sends `""` for unknown dates.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw?.trim(), "%Y-%m-%d").ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
