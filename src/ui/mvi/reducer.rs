use super::intent::Intent;
use super::state::UiState;

/// `(State, Intent) -> State`, with no side effects.
///
/// Anything that has to leave the UI thread (a network request, say) is
/// read back from the new state by the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
