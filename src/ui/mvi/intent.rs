/// Marker for values a [`Reducer`](super::Reducer) accepts.
///
/// Intents come from key handling (cursor moves, typed characters) and from
/// the search worker (results, failures).
pub trait Intent: Send + 'static {}
