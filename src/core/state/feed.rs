//! Photo feed state: the pagination controller
//!
//! `FeedState` owns the accumulated photos, the page cursor, the in-flight
//! marker and the last error. `advance()` is safe to call at any time: while a
//! page is outstanding it does nothing, so at most one request is ever in flight.
//! A call that is refused is dropped, not queued; another trigger has to occur
//! after the guard clears to fetch further.

pub mod pagination;

use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg},
    domain::photo::PhotoRecord,
};

use pagination::Pagination;

/// Message shown to the user for any failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load images";

#[derive(Debug, Clone, Default)]
pub struct FeedState {
    items: Vec<PhotoRecord>,
    pagination: Pagination,
    last_error: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All photos received so far, in page-arrival order
    pub fn items(&self) -> &[PhotoRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&PhotoRecord> {
        self.items.last()
    }

    pub fn get(&self, index: usize) -> Option<&PhotoRecord> {
        self.items.get(index)
    }

    pub fn next_page(&self) -> u32 {
        self.pagination.next_page()
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of pages received so far
    pub fn pages_loaded(&self) -> u32 {
        self.pagination.next_page().saturating_sub(1)
    }

    /// Start fetching the next page unless one is already in flight
    pub fn advance(&mut self) -> Option<Cmd> {
        match self.pagination.start_loading() {
            Some(page) => {
                log::debug!("Fetching page {page}");
                Some(Cmd::FetchPage { page })
            }
            None => {
                log::debug!(
                    "advance ignored: page {:?} is still loading",
                    self.pagination.in_flight()
                );
                None
            }
        }
    }

    /// Append a received page and move the cursor forward
    pub fn on_page_loaded(&mut self, page: u32, photos: Vec<PhotoRecord>) {
        if !self.pagination.finish_loaded(page) {
            log::warn!(
                "Ignoring page {page}: expected {:?}",
                self.pagination.in_flight()
            );
            return;
        }

        log::info!("Loaded page {page} with {} photos", photos.len());
        self.items.extend(photos);
        // last_error stays until dismiss_error
    }

    /// Record a failed fetch; photos and cursor are left untouched
    pub fn on_page_failed(&mut self, page: u32, reason: &str) {
        if !self.pagination.finish_failed(page) {
            log::warn!(
                "Ignoring failure for page {page}: expected {:?}",
                self.pagination.in_flight()
            );
            return;
        }

        log::error!("Failed to load page {page}: {reason}");
        self.last_error = Some(FETCH_FAILED_MESSAGE.to_string());
    }

    /// Clear the error banner
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::Advance => self.advance().into_iter().collect(),
            FeedMsg::PageLoaded { page, photos } => {
                self.on_page_loaded(page, photos);
                vec![]
            }
            FeedMsg::PageFailed { page, reason } => {
                self.on_page_failed(page, &reason);
                vec![]
            }
            FeedMsg::DismissError => {
                self.dismiss_error();
                vec![]
            }
        }
    }
}
