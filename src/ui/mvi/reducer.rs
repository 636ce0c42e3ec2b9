use super::intent::Intent;
use super::state::UiState;

/// Pure state transition for one screen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume `state` and return its successor. No I/O, no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
