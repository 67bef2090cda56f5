//! Grid geometry for the gallery
//!
//! Both the update loop (to decide which card is on screen) and the renderer
//! (to place cards) derive their geometry from `GridLayout`, so they always
//! agree on what is visible.

use std::ops::Range;

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Width of one photo card in columns
pub const CARD_WIDTH: u16 = 32;
/// Height of one photo card in rows
pub const CARD_HEIGHT: u16 = 6;
/// Rows taken by the header line and the status line
pub const CHROME_HEIGHT: u16 = 2;

/// Terminal size as last reported by a resize event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Area available to the card grid
    pub fn grid_height(&self) -> u16 {
        self.height.saturating_sub(CHROME_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
    /// Rows with at least one line on screen
    visible_rows: usize,
    /// Rows that fit on screen entirely (at least 1)
    page_rows: usize,
}

impl GridLayout {
    pub fn new(viewport: Viewport) -> Self {
        let columns = usize::from((viewport.width / CARD_WIDTH).max(1));
        let grid_height = viewport.grid_height();
        let visible_rows = usize::from(grid_height.div_ceil(CARD_HEIGHT));
        let page_rows = usize::from((grid_height / CARD_HEIGHT).max(1));

        Self {
            columns,
            visible_rows,
            page_rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    pub fn total_rows(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }

    /// Largest scroll position that still keeps the grid filled
    pub fn max_scroll_row(&self, len: usize) -> usize {
        self.total_rows(len).saturating_sub(self.page_rows)
    }

    /// Whether the card at `index` intersects the screen when scrolled to `scroll_row`
    pub fn is_visible(&self, index: usize, scroll_row: usize) -> bool {
        let row = self.row_of(index);
        row >= scroll_row && row < scroll_row + self.visible_rows
    }

    /// Indices of the cards on screen
    pub fn visible_range(&self, scroll_row: usize, len: usize) -> Range<usize> {
        let start = (scroll_row * self.columns).min(len);
        let end = ((scroll_row + self.visible_rows) * self.columns).min(len);
        start..end
    }

    /// Scroll position that keeps `selected` fully on screen, moving as little as possible
    pub fn scroll_row_following(&self, selected: usize, scroll_row: usize) -> usize {
        let row = self.row_of(selected);
        if row < scroll_row {
            row
        } else if row >= scroll_row + self.page_rows {
            row + 1 - self.page_rows
        } else {
            scroll_row
        }
    }

    /// Screen area of the card at `index`, clipped to `grid`
    pub fn card_area(&self, index: usize, scroll_row: usize, grid: Rect) -> Option<Rect> {
        if !self.is_visible(index, scroll_row) {
            return None;
        }

        let card_width = grid.width / self.columns as u16;
        let column = (index % self.columns) as u16;
        let visual_row = (self.row_of(index) - scroll_row) as u16;

        let x = grid.x + column * card_width;
        let y = grid.y + visual_row * CARD_HEIGHT;
        let bottom = grid.y + grid.height;
        if y >= bottom {
            return None;
        }

        Some(Rect::new(
            x,
            y,
            card_width,
            CARD_HEIGHT.min(bottom - y),
        ))
    }
}
