use serde::{Deserialize, Serialize};

use crate::domain::photo::PhotoRecord;

/// Messages specific to FeedState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    /// Fetch the next page unless one is already in flight
    Advance,

    // Fetch completions
    PageLoaded { page: u32, photos: Vec<PhotoRecord> },
    PageFailed { page: u32, reason: String },

    /// Clear the sticky error banner
    DismissError,
}

impl FeedMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        false
    }
}
