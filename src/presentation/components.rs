//! Stateless components that draw the application from `AppState`

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod gallery;

pub use gallery::GalleryComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub gallery: GalleryComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            gallery: GalleryComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.gallery.view(state, frame, area);
    }
}
