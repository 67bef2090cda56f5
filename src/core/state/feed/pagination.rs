//! Pagination state management for the photo feed

/// Page cursor plus the single-flight marker.
///
/// `next_page` starts at 1, only moves forward, and only after a page has
/// been received. `in_flight` holds the page currently being fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    next_page: u32,
    in_flight: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self {
            next_page: 1,
            in_flight: None,
        }
    }

    /// The page that the next fetch will request
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Check if a page is currently being fetched
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The page currently being fetched
    pub fn in_flight(&self) -> Option<u32> {
        self.in_flight
    }

    /// Mark the next page as in flight and return its number.
    ///
    /// Returns `None` if a page is already in flight.
    pub fn start_loading(&mut self) -> Option<u32> {
        if self.in_flight.is_some() {
            return None;
        }
        self.in_flight = Some(self.next_page);
        self.in_flight
    }

    /// Record a successful response for `page`; returns false for a page that is not in flight
    pub fn finish_loaded(&mut self, page: u32) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }
        self.in_flight = None;
        self.next_page = self.next_page.saturating_add(1);
        true
    }

    /// Record a failed response for `page`; the cursor stays where it is
    pub fn finish_failed(&mut self, page: u32) -> bool {
        if self.in_flight != Some(page) {
            return false;
        }
        self.in_flight = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pagination_default() {
        let state = Pagination::new();
        assert_eq!(state.next_page(), 1);
        assert!(!state.is_loading());
        assert_eq!(state.in_flight(), None);
    }

    #[test]
    fn test_start_loading_is_single_flight() {
        let mut state = Pagination::new();

        assert_eq!(state.start_loading(), Some(1));
        assert!(state.is_loading());

        // A second start while page 1 is outstanding is refused
        assert_eq!(state.start_loading(), None);
        assert_eq!(state.in_flight(), Some(1));
    }

    #[test]
    fn test_finish_loaded_advances_cursor() {
        let mut state = Pagination::new();
        state.start_loading();

        assert!(state.finish_loaded(1));
        assert!(!state.is_loading());
        assert_eq!(state.next_page(), 2);

        assert_eq!(state.start_loading(), Some(2));
    }

    #[test]
    fn test_finish_failed_keeps_cursor() {
        let mut state = Pagination::new();
        state.start_loading();

        assert!(state.finish_failed(1));
        assert!(!state.is_loading());
        assert_eq!(state.next_page(), 1);
    }

    #[test]
    fn test_finish_for_unexpected_page_is_ignored() {
        let mut state = Pagination::new();

        // Nothing in flight
        assert!(!state.finish_loaded(1));
        assert_eq!(state.next_page(), 1);

        state.start_loading();
        assert!(!state.finish_loaded(7));
        assert!(!state.finish_failed(7));
        assert_eq!(state.in_flight(), Some(1));
        assert_eq!(state.next_page(), 1);
    }
}
