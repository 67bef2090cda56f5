//! Wiring between the Elm core and the outside world
//!
//! - `Runtime`: state, message queues and command execution
//! - `AppRunner`: event loop over the terminal and the feed service

pub mod app_runner;
pub mod runtime;
