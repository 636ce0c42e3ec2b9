use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub numbers: NumbersConfig,
    #[serde(default)]
    pub videos: VideosConfig,
}

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Numbered rows generated at startup.
    #[default]
    Numbers,
    /// Video search with results and detail pane.
    Videos,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Screen shown on startup (default: numbers).
    #[serde(default)]
    pub start_screen: Screen,
}

/// Largest `numbers.row_count` accepted by validation.
pub const MAX_ROW_COUNT: usize = 1_000_000;

/// Settings for the numbered list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumbersConfig {
    /// How many rows to generate (default: 100, at most [`MAX_ROW_COUNT`]).
    #[serde(default = "default_row_count")]
    pub row_count: usize,
}

/// Settings for the video search screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosConfig {
    /// JSON catalog to search. Uses the built-in catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Prefix joined with a video id to form the embed URL.
    #[serde(default = "default_embed_base_url")]
    pub embed_base_url: String,
    /// Upper bound on results per search (default: 25).
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_row_count() -> usize {
    100
}

fn default_embed_base_url() -> String {
    "https://www.youtube.com/embed/".to_string()
}

fn default_max_results() -> usize {
    25
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_screen: Screen::default(),
        }
    }
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            row_count: default_row_count(),
        }
    }
}

impl Default for VideosConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            embed_base_url: default_embed_base_url(),
            max_results: default_max_results(),
        }
    }
}
