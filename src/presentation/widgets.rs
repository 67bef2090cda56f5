//! Reusable widgets

pub mod photo_card;
