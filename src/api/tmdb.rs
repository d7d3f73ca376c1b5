// TMDB v3 client. Every public query fails closed: errors are logged and turned
// into an empty list or `None`, never handed back to the caller. The `try_*`
// variants expose the underlying `Result` for tests and diagnostics.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::error::CatalogError;
use crate::api::images::ImageUrls;
use crate::api::models::{CatalogItem, MediaKind, TmdbMedia, TmdbPage, TmdbVideo, VideoRef};
use crate::config::CatalogConfig;

pub const TRENDING: &str = "/trending/all/week";
pub const POPULAR_MOVIES: &str = "/movie/popular";
pub const TOP_RATED: &str = "/movie/top_rated";
pub const POPULAR_SHOWS: &str = "/tv/popular";
pub const DISCOVER_SHOWS: &str = "/discover/tv";
pub const NOW_PLAYING: &str = "/movie/now_playing";
pub const SEARCH: &str = "/search/multi";

const TRAILER_CATEGORY: &str = "Trailer";
const TRAILER_SITE: &str = "YouTube";
const TRAILER_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    originals_network_id: u32,
    images: ImageUrls,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        if config.api_key.trim().is_empty() {
            warn!("no catalog API key configured; every request will be rejected");
        }
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            originals_network_id: config.originals_network_id,
            images: ImageUrls::new(config.image_base_url.clone()),
        })
    }

    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    /// `<base><endpoint>?api_key=<key>&k=v...`, every value percent-encoded.
    pub fn api_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    // ── Lists ──

    pub async fn trending(&self) -> Vec<CatalogItem> {
        self.list("trending", TRENDING, &[], None).await
    }

    pub async fn popular_movies(&self) -> Vec<CatalogItem> {
        self.list("popular", POPULAR_MOVIES, &[], Some(MediaKind::Movie))
            .await
    }

    pub async fn top_rated(&self) -> Vec<CatalogItem> {
        self.list("top_rated", TOP_RATED, &[], Some(MediaKind::Movie))
            .await
    }

    pub async fn popular_shows(&self) -> Vec<CatalogItem> {
        self.list("shows", POPULAR_SHOWS, &[], Some(MediaKind::Show))
            .await
    }

    /// Shows from a single network, standing in for that network's originals.
    pub async fn originals(&self) -> Vec<CatalogItem> {
        let network = self.originals_network_id.to_string();
        self.list(
            "originals",
            DISCOVER_SHOWS,
            &[("with_networks", network.as_str())],
            Some(MediaKind::Show),
        )
        .await
    }

    pub async fn now_playing(&self) -> Vec<CatalogItem> {
        self.list("now_playing", NOW_PLAYING, &[], Some(MediaKind::Movie))
            .await
    }

    // ── Search ──

    pub async fn search(&self, query: &str) -> Vec<CatalogItem> {
        match self.try_search(query).await {
            Ok(items) => items,
            Err(e) => {
                if e.is_failure() {
                    warn!(query, error = %e, "search failed");
                }
                Vec::new()
            }
        }
    }

    /// Blank queries are rejected before any request goes out.
    pub async fn try_search(&self, query: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }
        self.try_list(SEARCH, &[("query", query)], None).await
    }

    // ── Details & videos ──

    pub async fn details(&self, id: u64, kind: MediaKind) -> Option<CatalogItem> {
        match self.try_details(id, kind).await {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(id, ?kind, error = %e, "detail lookup failed");
                None
            }
        }
    }

    pub async fn try_details(&self, id: u64, kind: MediaKind) -> Result<CatalogItem, CatalogError> {
        let endpoint = format!("/{}/{}", kind.path_segment(), id);
        let media: TmdbMedia = self.get_json(&endpoint, &[]).await?;
        // Detail bodies carry no media_type; the requested kind is authoritative.
        media.into_item(Some(kind)).ok_or(CatalogError::NotFound)
    }

    pub async fn videos(&self, id: u64, kind: MediaKind) -> Vec<VideoRef> {
        match self.try_videos(id, kind).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!(id, ?kind, error = %e, "video listing failed");
                Vec::new()
            }
        }
    }

    pub async fn try_videos(&self, id: u64, kind: MediaKind) -> Result<Vec<VideoRef>, CatalogError> {
        let endpoint = format!("/{}/{}/videos", kind.path_segment(), id);
        let page: TmdbPage = self.get_json(&endpoint, &[]).await?;
        let results = page
            .results
            .ok_or_else(|| CatalogError::Malformed("missing `results`".to_string()))?;
        Ok(results
            .into_iter()
            .filter_map(|v| serde_json::from_value::<TmdbVideo>(v).ok())
            .filter_map(TmdbVideo::into_video_ref)
            .collect())
    }

    /// Watch URL of the first YouTube trailer, if the title has one.
    pub async fn trailer_url(&self, id: u64, kind: MediaKind) -> Option<String> {
        select_trailer(&self.videos(id, kind).await)
    }

    // ── Plumbing ──

    async fn list(
        &self,
        label: &'static str,
        endpoint: &str,
        params: &[(&str, &str)],
        hint: Option<MediaKind>,
    ) -> Vec<CatalogItem> {
        match self.try_list(endpoint, params, hint).await {
            Ok(items) => {
                debug!(label, count = items.len(), "catalog list loaded");
                items
            }
            Err(e) => {
                warn!(label, error = %e, "catalog list failed");
                Vec::new()
            }
        }
    }

    async fn try_list(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        hint: Option<MediaKind>,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let page: TmdbPage = self.get_json(endpoint, params).await?;
        let results = page
            .results
            .ok_or_else(|| CatalogError::Malformed("missing `results`".to_string()))?;
        Ok(items_from_results(results, hint))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = self.api_url(endpoint, params);
        debug!(endpoint, "catalog request");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}

/// Normalize a page of raw results. Entries that don't parse, and people from
/// multi-search, are skipped.
pub fn items_from_results(results: Vec<serde_json::Value>, hint: Option<MediaKind>) -> Vec<CatalogItem> {
    results
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<TmdbMedia>(raw) {
            Ok(media) => media.into_item(hint),
            Err(e) => {
                debug!(error = %e, "skipping unparseable catalog entry");
                None
            }
        })
        .collect()
}

/// First entry that is a trailer hosted on YouTube, as a watch URL.
pub fn select_trailer(videos: &[VideoRef]) -> Option<String> {
    videos
        .iter()
        .find(|v| v.category == TRAILER_CATEGORY && v.site == TRAILER_SITE)
        .map(|v| format!("{}{}", TRAILER_WATCH_URL, v.key))
}
