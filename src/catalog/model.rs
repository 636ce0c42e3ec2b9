use serde::{Deserialize, Serialize};

/// A video search result, in the shape of a YouTube search item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Video {
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: VideoId {
                video_id: video_id.into(),
            },
            snippet: Snippet {
                title: title.into(),
                description: description.into(),
            },
        }
    }

    pub fn video_id(&self) -> &str {
        &self.id.video_id
    }

    pub fn title(&self) -> &str {
        &self.snippet.title
    }

    pub fn description(&self) -> &str {
        &self.snippet.description
    }

    /// Case-insensitive match against title or description.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.snippet.title.to_lowercase().contains(needle)
            || self.snippet.description.to_lowercase().contains(needle)
    }
}
