//! Presentation layer
//!
//! - Stateless components rendering `AppState`
//! - Reusable widgets
//! - Keybinding configuration

pub mod components;
pub mod config;
pub mod widgets;
