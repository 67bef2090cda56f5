//! Domain logic
//!
//! This module contains domain-specific types and helpers:
//! - Photo records received from the feed
//! - Text processing utilities

pub mod photo;
pub mod text;
