use thiserror::Error;

/// Errors returned by [`RowDataSource`](super::RowDataSource) accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// Row access outside `[0, len)`. Usually a stale index held across
    /// snapshots by the caller.
    #[error("Row index {index} out of range for snapshot of {len} rows")]
    IndexOutOfRange { index: isize, len: usize },
}
