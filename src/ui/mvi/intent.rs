/// Marker trait for intent objects.
///
/// Intents are produced by the input layer and consumed by a [`Reducer`].
/// They carry no behavior of their own.
///
/// [`Reducer`]: super::Reducer
pub trait Intent: Send + 'static {}
