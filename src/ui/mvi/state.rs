/// Marker for screen state.
///
/// State is replaced, never patched: reducers consume the old value and
/// return a new one, and views only borrow it. `PartialEq` lets callers skip
/// work when a reduction was a no-op.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
