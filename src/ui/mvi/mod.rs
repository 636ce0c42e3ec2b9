//! Model-View-Intent (MVI) primitives for the screens.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned, cloneable snapshot of one screen
//! - **Intent**: key press or search outcome addressed to that screen
//! - **Reducer**: `(State, Intent) -> State`, the only place state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
