use crate::core::{cmd::Cmd, msg::gallery::GalleryMsg};

mod layout;
mod trigger;

pub use layout::{GridLayout, Viewport, CARD_HEIGHT, CARD_WIDTH, CHROME_HEIGHT};
pub use trigger::{Observation, VisibilityTrigger};

/// Gallery view state: selection, scroll position and the load-more trigger
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    selected: Option<usize>,
    scroll_row: usize,
    viewport: Viewport,
    pub trigger: VisibilityTrigger,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// First grid row on screen
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.viewport)
    }

    /// Whether the card at `index` is at least partially on screen
    pub fn is_item_visible(&self, index: usize) -> bool {
        self.layout().is_visible(index, self.scroll_row)
    }

    pub fn set_viewport(&mut self, viewport: Viewport, len: usize) {
        self.viewport = viewport;
        self.clamp_scroll(len);
        if let Some(selected) = self.selected {
            self.scroll_row = self.layout().scroll_row_following(selected, self.scroll_row);
        }
    }

    fn clamp_scroll(&mut self, len: usize) {
        self.scroll_row = self.scroll_row.min(self.layout().max_scroll_row(len));
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.scroll_row = self.layout().scroll_row_following(index, self.scroll_row);
    }

    /// Gallery-specific update function
    /// `len` is the number of photos currently in the feed
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GalleryMsg, len: usize) -> Vec<Cmd> {
        let Some(last) = len.checked_sub(1) else {
            // Nothing to navigate yet
            self.selected = None;
            self.scroll_row = 0;
            return vec![];
        };

        let columns = self.layout().columns();
        let page = columns * self.layout().page_rows();
        let current = self.selected;

        match msg {
            GalleryMsg::SelectNext => {
                self.select(current.map_or(0, |i| (i + 1).min(last)));
            }
            GalleryMsg::SelectPrevious => {
                self.select(current.map_or(0, |i| i.saturating_sub(1)));
            }
            GalleryMsg::SelectRowBelow => {
                self.select(current.map_or(0, |i| (i + columns).min(last)));
            }
            GalleryMsg::SelectRowAbove => {
                self.select(current.map_or(0, |i| i.checked_sub(columns).unwrap_or(i)));
            }
            GalleryMsg::PageDown => {
                self.select(current.map_or(0, |i| (i + page).min(last)));
            }
            GalleryMsg::PageUp => {
                self.select(current.map_or(0, |i| i.saturating_sub(page)));
            }
            GalleryMsg::SelectFirst => self.select(0),
            GalleryMsg::SelectLast => self.select(last),
            GalleryMsg::ScrollBy(delta) => {
                let max = self.layout().max_scroll_row(len);
                let target = if delta.is_negative() {
                    self.scroll_row.saturating_sub(delta.unsigned_abs() as usize)
                } else {
                    self.scroll_row.saturating_add(delta as usize)
                };
                self.scroll_row = target.min(max);
            }
        }

        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// 2 columns, 4 rows on screen
    fn gallery() -> GalleryState {
        let mut gallery = GalleryState::new();
        gallery.set_viewport(Viewport::new(80, 26), 0);
        gallery
    }

    #[test]
    fn test_gallery_state_default() {
        let gallery = GalleryState::default();
        assert_eq!(gallery.selected_index(), None);
        assert_eq!(gallery.scroll_row(), 0);
        assert_eq!(gallery.viewport(), Viewport::default());
        assert_eq!(gallery.trigger.active_observations(), 0);
    }

    #[test]
    fn test_navigation_on_empty_feed_does_nothing() {
        let mut gallery = gallery();

        let cmds = gallery.update(GalleryMsg::SelectNext, 0);

        assert!(cmds.is_empty());
        assert_eq!(gallery.selected_index(), None);
    }

    #[rstest]
    #[case(GalleryMsg::SelectNext, Some(5), 6)]
    #[case(GalleryMsg::SelectPrevious, Some(5), 4)]
    #[case(GalleryMsg::SelectRowBelow, Some(5), 7)]
    #[case(GalleryMsg::SelectRowAbove, Some(5), 3)]
    #[case(GalleryMsg::SelectRowAbove, Some(1), 1)]
    #[case(GalleryMsg::SelectRowBelow, Some(19), 19)]
    #[case(GalleryMsg::SelectNext, Some(19), 19)]
    #[case(GalleryMsg::SelectPrevious, Some(0), 0)]
    #[case(GalleryMsg::PageDown, Some(0), 8)]
    #[case(GalleryMsg::PageUp, Some(10), 2)]
    #[case(GalleryMsg::SelectFirst, Some(10), 0)]
    #[case(GalleryMsg::SelectLast, Some(3), 19)]
    #[case(GalleryMsg::SelectNext, None, 0)]
    fn test_selection_moves(
        #[case] msg: GalleryMsg,
        #[case] start: Option<usize>,
        #[case] expected: usize,
    ) {
        let mut gallery = gallery();
        if let Some(start) = start {
            gallery.select(start);
        }

        gallery.update(msg, 20);

        assert_eq!(gallery.selected_index(), Some(expected));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut gallery = gallery();

        gallery.update(GalleryMsg::SelectLast, 20);
        assert_eq!(gallery.scroll_row(), 6);
        assert!(gallery.is_item_visible(19));
        assert!(!gallery.is_item_visible(0));

        gallery.update(GalleryMsg::SelectFirst, 20);
        assert_eq!(gallery.scroll_row(), 0);
        assert!(gallery.is_item_visible(0));
    }

    #[test]
    fn test_scroll_by_is_clamped() {
        let mut gallery = gallery();

        gallery.update(GalleryMsg::ScrollBy(3), 20);
        assert_eq!(gallery.scroll_row(), 3);

        gallery.update(GalleryMsg::ScrollBy(100), 20);
        assert_eq!(gallery.scroll_row(), 6);

        gallery.update(GalleryMsg::ScrollBy(-100), 20);
        assert_eq!(gallery.scroll_row(), 0);
        assert_eq!(gallery.selected_index(), None);
    }

    #[test]
    fn test_resize_keeps_selection_on_screen() {
        let mut gallery = gallery();
        gallery.update(GalleryMsg::SelectLast, 20);

        // shrink to 1 column, 1 full row
        gallery.set_viewport(Viewport::new(32, 8), 20);

        assert!(gallery.is_item_visible(19));
        assert_eq!(gallery.scroll_row(), 19);
    }

    #[test]
    fn test_growing_viewport_clamps_scroll() {
        let mut gallery = gallery();
        gallery.update(GalleryMsg::ScrollBy(6), 20);

        gallery.set_viewport(Viewport::new(80, 62), 20);

        assert_eq!(gallery.scroll_row(), 0);
    }
}
