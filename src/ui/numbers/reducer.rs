use crate::ui::list_view::step_cursor;
use crate::ui::mvi::Reducer;
use crate::ui::numbers::intent::NumbersIntent;
use crate::ui::numbers::state::NumbersState;

pub struct NumbersReducer;

/// `"0"`, `"1"`, ... up to `count - 1`.
pub fn numbered_rows(count: usize) -> impl Iterator<Item = String> {
    (0..count).map(|index| index.to_string())
}

impl Reducer for NumbersReducer {
    type State = NumbersState;
    type Intent = NumbersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = state.source.len();
        match intent {
            NumbersIntent::Generate { count } => NumbersState {
                source: state.source.clone_with_rows(numbered_rows(count)),
                selected: 0,
            },
            NumbersIntent::MoveUp => with_selected(state, |s| step_cursor(s, -1, len)),
            NumbersIntent::MoveDown => with_selected(state, |s| step_cursor(s, 1, len)),
            NumbersIntent::PageUp { page } => {
                with_selected(state, |s| step_cursor(s, -page_delta(page), len))
            }
            NumbersIntent::PageDown { page } => {
                with_selected(state, |s| step_cursor(s, page_delta(page), len))
            }
            NumbersIntent::Home => with_selected(state, |_| 0),
            NumbersIntent::End => with_selected(state, |_| len.saturating_sub(1)),
        }
    }
}

fn with_selected(state: NumbersState, f: impl FnOnce(usize) -> usize) -> NumbersState {
    let selected = f(state.selected);
    NumbersState { selected, ..state }
}

fn page_delta(page: usize) -> isize {
    isize::try_from(page.max(1)).unwrap_or(isize::MAX)
}
