use serde::{Deserialize, Serialize};

pub mod feed;
pub mod gallery;
pub mod system;

use feed::FeedMsg;
use gallery::GalleryMsg;
use system::SystemMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Feed operations (delegated to FeedState)
    Feed(FeedMsg),

    // Gallery navigation (delegated to GalleryState)
    Gallery(GalleryMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Feed(msg) => msg.is_frequent(),
            Msg::Gallery(msg) => msg.is_frequent(),
        }
    }
}
