use crate::ui::list_view::step_cursor;
use crate::ui::mvi::Reducer;
use crate::ui::videos::intent::VideoIntent;
use crate::ui::videos::state::VideoListState;

pub struct VideoReducer;

impl Reducer for VideoReducer {
    type State = VideoListState;
    type Intent = VideoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VideoIntent::SearchStarted { term } => VideoListState {
                loading: true,
                last_query: Some(term),
                last_error: None,
                search_generation: state.search_generation.wrapping_add(1),
                ..state
            },
            VideoIntent::ResultsArrived {
                term,
                generation,
                videos,
            } => {
                if generation != state.search_generation {
                    tracing::debug!(%term, generation, "dropping results for superseded search");
                    return state;
                }
                VideoListState {
                    source: state.source.clone_with_rows(videos),
                    loading: false,
                    cursor: 0,
                    selected: None,
                    last_error: None,
                    ..state
                }
            }
            VideoIntent::SearchFailed {
                term,
                generation,
                message,
            } => {
                if generation != state.search_generation {
                    tracing::debug!(%term, generation, "dropping failure for superseded search");
                    return state;
                }
                VideoListState {
                    loading: false,
                    last_error: Some(message),
                    ..state
                }
            }
            VideoIntent::MoveUp => {
                let cursor = step_cursor(state.cursor, -1, state.source.len());
                VideoListState { cursor, ..state }
            }
            VideoIntent::MoveDown => {
                let cursor = step_cursor(state.cursor, 1, state.source.len());
                VideoListState { cursor, ..state }
            }
            VideoIntent::Select => {
                if state.source.is_empty() {
                    return state;
                }
                VideoListState {
                    selected: Some(state.cursor),
                    ..state
                }
            }
            VideoIntent::ClearSelection => VideoListState {
                selected: None,
                ..state
            },
        }
    }
}
