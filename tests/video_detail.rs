mod common;

use common::sample_videos;
use listtube::ui::detail::{embed_url, VideoDetail, VideoDetailProps};
use listtube::ui::mvi::Reducer;
use listtube::ui::videos::{VideoIntent, VideoListState, VideoReducer};

const BASE: &str = "https://www.youtube.com/embed/";

fn with_results() -> VideoListState {
    [
        VideoIntent::SearchStarted {
            term: "q".to_string(),
        },
        VideoIntent::ResultsArrived {
            term: "q".to_string(),
            generation: 1,
            videos: sample_videos(),
        },
    ]
    .into_iter()
    .fold(VideoListState::default(), VideoReducer::reduce)
}

#[test]
fn props_map_loading_and_selection() {
    let state = VideoReducer::reduce(with_results(), VideoIntent::Select);
    let props = VideoDetailProps::from_state(&state);

    assert!(!props.loading);
    assert_eq!(props.video.as_ref().map(|v| v.video_id()), Some("v1"));
}

#[test]
fn loading_state_renders_loading() {
    let state = VideoReducer::reduce(
        VideoListState::default(),
        VideoIntent::SearchStarted {
            term: "q".to_string(),
        },
    );
    let detail = VideoDetail::from_props(VideoDetailProps::from_state(&state), BASE);
    assert_eq!(detail, VideoDetail::Loading);
}

#[test]
fn no_selection_renders_empty() {
    let detail = VideoDetail::from_props(VideoDetailProps::from_state(&with_results()), BASE);
    assert_eq!(detail, VideoDetail::Empty);
}

#[test]
fn selection_renders_embed_url_and_snippet() {
    let state = VideoReducer::reduce(with_results(), VideoIntent::MoveDown);
    let state = VideoReducer::reduce(state, VideoIntent::Select);
    let detail = VideoDetail::from_props(VideoDetailProps::from_state(&state), BASE);

    assert_eq!(
        detail,
        VideoDetail::Ready {
            embed_url: "https://www.youtube.com/embed/v2".to_string(),
            title: "List virtualization".to_string(),
            description: "Render only what changed".to_string(),
        }
    );
}

#[test]
fn stale_selection_renders_empty() {
    let state = VideoListState {
        selected: Some(10),
        ..with_results()
    };
    let props = VideoDetailProps::from_state(&state);
    assert_eq!(props.video, None);
}

#[test]
fn embed_url_without_trailing_slash() {
    assert_eq!(embed_url("http://host/embed", "id"), "http://host/embed/id");
}
