use crate::catalog::Video;
use crate::datasource::{DataSourceError, RowDataSource};
use crate::ui::mvi::UiState;

/// Store behind the videos screen: search results, cursor, selection and
/// the in-flight search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoListState {
    pub source: RowDataSource<Video>,
    pub loading: bool,
    /// Row under the cursor.
    pub cursor: usize,
    /// Row shown in the detail pane.
    pub selected: Option<usize>,
    /// Term of the most recent search, finished or not.
    pub last_query: Option<String>,
    /// Bumped by every started search. Outcomes carry the value their
    /// search started with, so repeated terms stay distinguishable.
    pub search_generation: u64,
    pub last_error: Option<String>,
}

impl UiState for VideoListState {}

impl VideoListState {
    /// The selected video, `Ok(None)` when nothing is selected.
    pub fn selected_video(&self) -> Result<Option<&Video>, DataSourceError> {
        self.selected
            .map(|index| self.source.row_at(index))
            .transpose()
    }

    pub fn row_label(index: usize) -> String {
        format!("Video {}", index)
    }
}
