mod common;

use common::sample_videos;
use listtube::ui::mvi::Reducer;
use listtube::ui::videos::{VideoIntent, VideoListState, VideoReducer};

fn reduce_all(state: VideoListState, intents: Vec<VideoIntent>) -> VideoListState {
    intents.into_iter().fold(state, VideoReducer::reduce)
}

fn started(term: &str) -> VideoIntent {
    VideoIntent::SearchStarted {
        term: term.to_string(),
    }
}

fn arrived(term: &str, generation: u64) -> VideoIntent {
    VideoIntent::ResultsArrived {
        term: term.to_string(),
        generation,
        videos: sample_videos(),
    }
}

#[test]
fn search_started_sets_loading() {
    let state = VideoReducer::reduce(VideoListState::default(), started("rust"));

    assert!(state.loading);
    assert_eq!(state.last_query.as_deref(), Some("rust"));
    assert_eq!(state.search_generation, 1);
    assert!(state.source.is_empty());
}

#[test]
fn results_replace_snapshot_and_reset_cursor() {
    let state = reduce_all(
        VideoListState::default(),
        vec![started("a"), arrived("a", 1), VideoIntent::MoveDown, VideoIntent::Select],
    );
    assert_eq!(state.cursor, 1);
    assert_eq!(state.selected, Some(1));

    let previous = state.source.clone();
    let state = reduce_all(
        state,
        vec![
            started("b"),
            VideoIntent::ResultsArrived {
                term: "b".to_string(),
                generation: 2,
                videos: sample_videos()[..1].to_vec(),
            },
        ],
    );

    assert!(!state.loading);
    assert_eq!(state.source.len(), 1);
    assert_eq!(state.cursor, 0);
    assert_eq!(state.selected, None);
    assert_eq!(previous.len(), 3);
}

#[test]
fn superseded_results_are_dropped() {
    let state = reduce_all(
        VideoListState::default(),
        vec![started("first"), started("second"), arrived("first", 1)],
    );

    assert!(state.loading);
    assert!(state.source.is_empty());
}

#[test]
fn repeated_term_waits_for_latest_search() {
    let state = reduce_all(
        VideoListState::default(),
        vec![started("x"), started("x"), arrived("x", 1)],
    );
    assert!(state.loading);
    assert!(state.source.is_empty());

    let state = reduce_all(
        state,
        vec![arrived("x", 2), VideoIntent::MoveDown, VideoIntent::Select],
    );
    assert!(!state.loading);
    assert_eq!(state.selected, Some(1));

    let state = reduce_all(
        state,
        vec![
            arrived("x", 1),
            VideoIntent::SearchFailed {
                term: "x".to_string(),
                generation: 1,
                message: "late failure".to_string(),
            },
        ],
    );
    assert_eq!(state.cursor, 1);
    assert_eq!(state.selected, Some(1));
    assert_eq!(state.last_error, None);
}

#[test]
fn failure_clears_loading_and_records_error() {
    let state = reduce_all(
        VideoListState::default(),
        vec![
            started("x"),
            VideoIntent::SearchFailed {
                term: "x".to_string(),
                generation: 1,
                message: "catalog missing".to_string(),
            },
        ],
    );

    assert!(!state.loading);
    assert_eq!(state.last_error.as_deref(), Some("catalog missing"));

    let retried = VideoReducer::reduce(state, started("x"));
    assert_eq!(retried.last_error, None);
}

#[test]
fn select_on_empty_list_is_noop() {
    let state = VideoReducer::reduce(VideoListState::default(), VideoIntent::Select);
    assert_eq!(state, VideoListState::default());
}

#[test]
fn selected_video_resolves_through_snapshot() {
    let state = reduce_all(
        VideoListState::default(),
        vec![
            started("a"),
            arrived("a", 1),
            VideoIntent::MoveDown,
            VideoIntent::MoveDown,
            VideoIntent::MoveDown,
            VideoIntent::Select,
        ],
    );

    let video = state.selected_video().unwrap().unwrap();
    assert_eq!(video.video_id(), "v3");

    let cleared = VideoReducer::reduce(state, VideoIntent::ClearSelection);
    assert_eq!(cleared.selected_video(), Ok(None));
}
