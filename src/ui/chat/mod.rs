//! Chat panel feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Panel state: visibility, input line, transcript
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_chat_panel;
pub use intent::ChatIntent;
pub use reducer::ChatReducer;
pub use state::{ChatPanelState, MAX_INPUT_CHARS};
