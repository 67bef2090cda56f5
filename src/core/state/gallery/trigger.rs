//! Load-more trigger bound to the last card of the gallery
//!
//! At most one card is observed at a time. Each time the last card changes,
//! the old observation is torn down and a fresh one starts out as "not
//! intersecting". When the observed card enters the viewport the trigger asks
//! the feed to advance. Nothing fires while it merely stays on screen.

use crate::{
    core::{cmd::Cmd, state::feed::FeedState},
    domain::photo::PhotoId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    target: PhotoId,
    index: usize,
    intersecting: bool,
}

impl Observation {
    pub fn target(&self) -> &PhotoId {
        &self.target
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityTrigger {
    observation: Option<Observation>,
}

impl VisibilityTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observation(&self) -> Option<&Observation> {
        self.observation.as_ref()
    }

    pub fn observed(&self) -> Option<&PhotoId> {
        self.observation.as_ref().map(|o| &o.target)
    }

    pub fn observed_index(&self) -> Option<usize> {
        self.observation.as_ref().map(|o| o.index)
    }

    /// Either 0 or 1
    pub fn active_observations(&self) -> usize {
        usize::from(self.observation.is_some())
    }

    /// Whether `element` is the card currently observed
    pub fn is_observing(&self, element: Option<(usize, &PhotoId)>) -> bool {
        match (&self.observation, element) {
            (Some(o), Some((index, id))) => o.index == index && &o.target == id,
            (None, None) => true,
            _ => false,
        }
    }

    /// Rebind the trigger to the last rendered card.
    ///
    /// Returns false and keeps the current observation when a page is loading.
    /// Otherwise replaces the observation, leaving none when `element` is `None`.
    pub fn attach(&mut self, element: Option<(usize, &PhotoId)>, feed: &FeedState) -> bool {
        if feed.is_loading() {
            log::debug!("attach skipped while page {} is loading", feed.next_page());
            return false;
        }

        self.observation = element.map(|(index, id)| Observation {
            target: id.clone(),
            index,
            intersecting: false,
        });
        log::debug!("observing {:?}", self.observed());
        true
    }

    /// Report whether the observed card is on screen.
    ///
    /// Advances the feed on a not-visible to visible transition only.
    pub fn notify(&mut self, visible: bool, feed: &mut FeedState) -> Option<Cmd> {
        let observation = self.observation.as_mut()?;
        let entered = visible && !observation.intersecting;
        observation.intersecting = visible;

        if entered {
            log::debug!("{} entered the viewport", observation.target);
            feed.advance()
        } else {
            None
        }
    }
}
