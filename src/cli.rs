use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, Screen};

/// Browse generated rows and search a local video catalog in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "listtube", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open on startup
    #[arg(long, value_enum)]
    pub screen: Option<Screen>,

    /// Number of rows to generate on the numbers screen
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// JSON video catalog to search
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Run this search when the videos screen starts
    #[arg(long, value_name = "TERM")]
    pub query: Option<String>,
}

impl Cli {
    /// Config file path: `--config` if given, otherwise the default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Overlay command-line overrides onto a loaded config.
    ///
    /// `--query` implies the videos screen unless `--screen` says otherwise.
    pub fn apply(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.numbers.row_count = rows;
        }
        if let Some(catalog) = &self.catalog {
            config.videos.catalog_path = Some(catalog.clone());
        }
        match (self.screen, &self.query) {
            (Some(screen), _) => config.ui.start_screen = screen,
            (None, Some(_)) => config.ui.start_screen = Screen::Videos,
            (None, None) => {}
        }
    }
}
