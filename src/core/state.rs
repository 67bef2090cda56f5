use crate::{domain::photo::PhotoRecord, infrastructure::config::Config};

pub mod feed;
pub mod gallery;
pub mod system;

use feed::FeedState;
use gallery::GalleryState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feed: FeedState,
    pub gallery: GalleryState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Photo under the selection cursor
    pub fn selected_photo(&self) -> Option<&PhotoRecord> {
        self.gallery
            .selected_index()
            .and_then(|i| self.feed.get(i))
    }
}
