use crate::catalog::Video;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum VideoIntent {
    SearchStarted { term: String },
    /// Results of the search started as `generation`. Ignored unless that
    /// is the latest search.
    ResultsArrived {
        term: String,
        generation: u64,
        videos: Vec<Video>,
    },
    SearchFailed {
        term: String,
        generation: u64,
        message: String,
    },
    MoveUp,
    MoveDown,
    /// Show the row under the cursor in the detail pane.
    Select,
    ClearSelection,
}

impl Intent for VideoIntent {}
