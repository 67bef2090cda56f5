//! # photoscroll - infinite-scroll photo gallery for the terminal
//!
//! Pages through a photo feed and appends each page to a grid of cards.
//! The next page is requested when the last card scrolls into view, with at
//! most one request in flight.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (feed requests, terminal control)
//! - **View** (`presentation`): rendering based on the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use photoscroll::{
//!     core::{cmd::Cmd, msg::{feed::FeedMsg, Msg}, state::AppState, update::update},
//! };
//!
//! let state = AppState::new();
//!
//! // The first advance asks for page 1
//! let (state, commands) = update(Msg::Feed(FeedMsg::Advance), state);
//! assert_eq!(commands, vec![Cmd::FetchPage { page: 1 }]);
//!
//! // A second advance while page 1 is in flight is dropped
//! let (state, commands) = update(Msg::Feed(FeedMsg::Advance), state);
//! assert!(commands.is_empty());
//! assert!(state.feed.is_loading());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
