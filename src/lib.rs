//! `folio`: a terminal portfolio with rotating quotes, projects and skills,
//! plus a small chat assistant.

pub mod chat;
pub mod cli;
pub mod config;
pub mod content;
pub mod logging;
pub mod rotation;
pub mod ui;
