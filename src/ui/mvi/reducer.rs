use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// This is the only place state transitions happen, and it must stay free of
/// side effects: no I/O and no timers.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
