use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchBarState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchBarState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SearchBarState { mut term } = state;
        match intent {
            SearchIntent::Insert(ch) if !ch.is_control() => term.push(ch),
            SearchIntent::Insert(_) => {}
            SearchIntent::Paste(text) => term.extend(text.chars().filter(|c| !c.is_control())),
            SearchIntent::Backspace => {
                term.pop();
            }
            SearchIntent::Clear => term.clear(),
        }
        SearchBarState { term }
    }
}
