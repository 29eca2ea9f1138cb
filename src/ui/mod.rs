//! Terminal UI: one event loop owning every carousel.

pub mod app;
pub mod chat;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod section;
pub mod terminal_guard;
pub mod theme;
