//! Data feed service
//!
//! A feed produces readings - from a sensor, an estimator, another
//! process. Implementations announce a fresh reading through the
//! [`FeedEvents`] receiver they were built with; the receiver decides
//! what happens next.

use tracing::debug;

/// Events a feed implementation may raise
pub trait FeedEvents {
    /// A new reading is available
    fn reading_ready(&mut self);
}

/// Contract for data feed services
///
/// Like [`Link`](crate::services::Link), a feed is always constructed
/// with its owned receiver.
pub trait Feed {
    /// Take one reading
    fn sample(&mut self);
}

/// Inert feed: holds its receiver, never raises events, reads nothing
pub struct NullFeed {
    #[allow(dead_code)]
    events: Box<dyn FeedEvents>,
}

impl NullFeed {
    /// Create a null feed owning the given receiver
    pub fn new(events: Box<dyn FeedEvents>) -> Self {
        debug!("NullFeed::new: created");
        Self { events }
    }
}

impl Feed for NullFeed {
    fn sample(&mut self) {
        debug!("NullFeed::sample: nothing to read");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NopEvents;

    impl FeedEvents for NopEvents {
        fn reading_ready(&mut self) {}
    }

    #[test]
    fn test_null_feed_sample_is_repeatable() {
        let mut feed = NullFeed::new(Box::new(NopEvents));
        feed.sample();
        feed.sample();
        feed.sample();
    }
}
