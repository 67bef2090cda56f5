use serde::{Deserialize, Serialize};

/// Messages specific to GalleryState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryMsg {
    // Selection movement
    SelectNext,
    SelectPrevious,
    SelectRowBelow,
    SelectRowAbove,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,

    /// Scroll the grid by rows without moving the selection (mouse wheel)
    ScrollBy(i32),
}

impl GalleryMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, GalleryMsg::ScrollBy(_))
    }
}
