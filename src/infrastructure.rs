//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Photo feed client and background fetch service

pub mod cli;
pub mod config;
pub mod feed_client;
pub mod feed_service;
pub mod tui;
