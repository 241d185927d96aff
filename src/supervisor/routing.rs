//! Owner-defined reaction logic for service events
//!
//! The routers are the only receiver implementations the supervisor
//! hands out. Each one holds a weak back-reference to the wiring cell,
//! never ownership: the supervisor outlives everything it constructs,
//! and a router never touches its back-reference during construction.

use std::rc::Weak;

use tracing::{debug, warn};

use crate::services::{FeedEvents, LinkEvents};

use super::core::Wiring;

/// Routes link events into the feed
pub(super) struct LinkRouter {
    wiring: Weak<Wiring>,
}

impl LinkRouter {
    pub(super) fn new(wiring: Weak<Wiring>) -> Self {
        Self { wiring }
    }
}

impl LinkEvents for LinkRouter {
    // A lost peer changes demand; poke the feed for a fresh reading.
    // Routing never re-enters the link, so this borrow cannot collide
    // with one held by the service that raised the event.
    fn peer_lost(&mut self) {
        debug!("LinkRouter::peer_lost: routing to feed");
        match self.wiring.upgrade() {
            Some(wiring) => wiring.feed.borrow_mut().sample(),
            None => warn!("LinkRouter::peer_lost: supervisor gone, event dropped"),
        }
    }
}

/// Routes feed events into the link
pub(super) struct FeedRouter {
    wiring: Weak<Wiring>,
}

impl FeedRouter {
    pub(super) fn new(wiring: Weak<Wiring>) -> Self {
        Self { wiring }
    }
}

impl FeedEvents for FeedRouter {
    // A fresh reading goes straight out over the link.
    fn reading_ready(&mut self) {
        debug!("FeedRouter::reading_ready: routing to link");
        match self.wiring.upgrade() {
            Some(wiring) => wiring.link.borrow_mut().transmit(),
            None => warn!("FeedRouter::reading_ready: supervisor gone, event dropped"),
        }
    }
}
