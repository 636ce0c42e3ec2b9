use crate::ui::mvi::UiState;

/// Text typed into the search bar. Loading is owned by the video store
/// and passed in when drawing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBarState {
    pub term: String,
}

impl UiState for SearchBarState {}

/// Label of the search button.
pub fn button_title(loading: bool) -> &'static str {
    if loading {
        "Loading..."
    } else {
        "Search"
    }
}
