//! Local video catalog.
//!
//! Stands in for a remote search API: videos are read from a JSON file (or
//! the catalog embedded in the binary) and searched in memory.

mod model;

pub use model::{Snippet, Video, VideoId};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog{}: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" '{}'", path.display()),
        None => String::new(),
    }
}

/// Accepted file shapes: a search response with `items`, or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Response { items: Vec<Video> },
    List(Vec<Video>),
}

#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<Video>,
}

impl VideoCatalog {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG, None)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, None)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::parse(&content, Some(path))?;
        tracing::info!(
            path = %path.display(),
            videos = catalog.len(),
            "loaded video catalog"
        );
        Ok(catalog)
    }

    fn parse(json: &str, path: Option<&Path>) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse {
                path: path.map(Path::to_path_buf),
                source: e,
            })?;
        let videos = match document {
            CatalogDocument::Response { items } => items,
            CatalogDocument::List(videos) => videos,
        };
        Ok(Self { videos })
    }

    /// Videos whose title or description contains `term`, ignoring case,
    /// in catalog order and at most `max_results` of them. A blank term
    /// matches everything.
    pub fn search(&self, term: &str, max_results: usize) -> Vec<Video> {
        let needle = term.trim().to_lowercase();
        self.videos
            .iter()
            .filter(|video| needle.is_empty() || video.matches(&needle))
            .take(max_results)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Load the catalog at `path` (or the built-in one) and search it.
///
/// The file is read on every call so edits show up in the next search.
pub fn search_catalog(
    path: Option<&Path>,
    term: &str,
    max_results: usize,
) -> Result<Vec<Video>, CatalogError> {
    let catalog = match path {
        Some(path) => VideoCatalog::load_from(path)?,
        None => VideoCatalog::builtin()?,
    };
    Ok(catalog.search(term, max_results))
}
