// User configuration loaded from ~/.config/termflix/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `catalog.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Application configuration, deserialized from `~/.config/termflix/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Target TUI refresh rate in frames per second (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Color theme name: "dark" or "light".
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_frame_rate() -> f64 {
    30.0
}

fn default_theme() -> String {
    crate::theme::THEME_DARK.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            theme: default_theme(),
        }
    }
}

/// Where and how the catalog API is reached.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Network whose shows fill the "Originals" row.
    #[serde(default = "default_originals_network_id")]
    pub originals_network_id: u32,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_originals_network_id() -> u32 {
    213
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            originals_network_id: default_originals_network_id(),
        }
    }
}

/// Timings and sizes for the browse screen.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseConfig {
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_hero_rotation_secs")]
    pub hero_rotation_secs: u64,
    /// How many trending items the hero banner cycles through.
    #[serde(default = "default_hero_items")]
    pub hero_items: usize,
    /// Skeleton cards shown per row while a row is loading.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_hero_rotation_secs() -> u64 {
    8
}

fn default_hero_items() -> usize {
    5
}

fn default_skeleton_count() -> usize {
    8
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            hero_rotation_secs: default_hero_rotation_secs(),
            hero_items: default_hero_items(),
            skeleton_count: default_skeleton_count(),
        }
    }
}

impl Config {
    /// Read config from the default location, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read config from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Let `TMDB_API_KEY` win over whatever the file says.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.catalog.api_key = key.trim().to_string();
            }
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termflix")
            .join("config.toml")
    }
}
