//! Model-View-Intent primitives for overlay panels.
//!
//! ```text
//! key press / chat reply ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Carousels are not MVI: they are driven by injected instants from the
//! event loop. Panels whose state is a pure function of user actions use
//! these traits instead.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
