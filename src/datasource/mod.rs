//! Row snapshots for list rendering.
//!
//! A [`RowDataSource`] is an immutable, ordered view of rows together with
//! the predicate that decides whether a row must be redrawn. Rendering code
//! never mutates a snapshot; it asks the current one for a new one:
//!
//! ```text
//! RowDataSource::new(pred) ──clone_with_rows(rows)──→ snapshot
//!        snapshot ──clone_with_rows(rows')──→ snapshot'
//!   diff_rows(snapshot, snapshot') ──→ which indices to redraw
//! ```
//!
//! Change detection is positional only: row `i` of the old snapshot is
//! compared with row `i` of the new one.

mod diff;
mod error;
mod source;

pub use diff::{diff_rows, RowChange, RowDiff};
pub use error::DataSourceError;
pub use source::{RowDataSource, RowPredicate};
