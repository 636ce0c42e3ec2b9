use listtube::ui::mvi::Reducer;
use listtube::ui::numbers::{numbered_rows, NumbersIntent, NumbersReducer, NumbersState};

fn generated(count: usize) -> NumbersState {
    NumbersReducer::reduce(NumbersState::default(), NumbersIntent::Generate { count })
}

#[test]
fn generate_builds_numbered_rows() {
    let state = generated(100);

    assert_eq!(state.source.len(), 100);
    assert_eq!(state.source.row_at(0).unwrap(), "0");
    assert_eq!(state.source.row_at(99).unwrap(), "99");
    assert!(state.source.row_at(100).is_err());
    assert_eq!(state.selected, 0);
}

#[test]
fn regenerate_resets_cursor_and_keeps_predicate() {
    let state = generated(10);
    let moved = NumbersReducer::reduce(state.clone(), NumbersIntent::End);
    let regenerated = NumbersReducer::reduce(moved, NumbersIntent::Generate { count: 3 });

    assert_eq!(regenerated.selected, 0);
    assert_eq!(regenerated.source.len(), 3);
    assert!(regenerated.source.shares_predicate(&state.source));
    assert_eq!(state.source.len(), 10);
}

#[test]
fn movement_is_clamped() {
    let state = generated(5);
    let up = NumbersReducer::reduce(state.clone(), NumbersIntent::MoveUp);
    assert_eq!(up.selected, 0);

    let end = NumbersReducer::reduce(state, NumbersIntent::End);
    assert_eq!(end.selected, 4);
    let down = NumbersReducer::reduce(end, NumbersIntent::MoveDown);
    assert_eq!(down.selected, 4);
}

#[test]
fn paging_moves_by_page() {
    let state = generated(100);
    let down = NumbersReducer::reduce(state, NumbersIntent::PageDown { page: 20 });
    assert_eq!(down.selected, 20);

    let up = NumbersReducer::reduce(down, NumbersIntent::PageUp { page: 30 });
    assert_eq!(up.selected, 0);

    let zero_page = NumbersReducer::reduce(up, NumbersIntent::PageDown { page: 0 });
    assert_eq!(zero_page.selected, 1);
}

#[test]
fn empty_list_keeps_cursor_at_zero() {
    let state = generated(0);
    for intent in [
        NumbersIntent::MoveDown,
        NumbersIntent::End,
        NumbersIntent::PageDown { page: 5 },
    ] {
        assert_eq!(NumbersReducer::reduce(state.clone(), intent).selected, 0);
    }
}

#[test]
fn numbered_rows_match_tutorial_sequence() {
    let rows: Vec<String> = numbered_rows(3).collect();
    assert_eq!(rows, vec!["0", "1", "2"]);
}
