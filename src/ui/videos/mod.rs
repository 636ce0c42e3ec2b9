mod intent;
mod reducer;
mod state;

pub use intent::VideoIntent;
pub use reducer::VideoReducer;
pub use state::VideoListState;
