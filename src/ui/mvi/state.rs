/// Marker trait for UI state objects.
///
/// `Default` is the session-start state; `PartialEq` lets callers skip a
/// redraw when an intent changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
