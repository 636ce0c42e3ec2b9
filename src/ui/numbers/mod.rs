mod intent;
mod reducer;
mod state;

pub use intent::NumbersIntent;
pub use reducer::{numbered_rows, NumbersReducer};
pub use state::NumbersState;
