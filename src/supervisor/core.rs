//! Supervisor core: ownership, wiring, lifecycle
//!
//! Construction is the delicate part. The routers need a reference to
//! the supervisor's wiring before the wiring exists, because each
//! service must be built with its receiver already in hand.
//! [`Rc::new_cyclic`] provides exactly that window: the routers get a
//! [`Weak`](std::rc::Weak) handle that only becomes usable once
//! construction completes, and nothing dereferences it before then.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::services::{Feed, FeedEvents, Link, LinkEvents, NullFeed, NullLink};

use super::routing::{FeedRouter, LinkRouter};

/// Default interval between stop-flag checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Supervisor lifecycle states
///
/// Transitions only move forward. [`Supervisor::run`] consumes the
/// supervisor, so a stopped supervisor cannot be restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Services built and wired, prime step not yet executed
    Constructed,
    /// Prime step done, loop not yet entered
    Initialized,
    /// Polling the stop flag
    Running,
    /// Stop flag observed, loop exited
    Stopped,
}

/// The services the supervisor owns, shared with the routers
///
/// Field order is drop order: the feed goes down before the link, and
/// each service takes its receiver down with it.
pub(super) struct Wiring {
    pub(super) feed: RefCell<Box<dyn Feed>>,
    pub(super) link: RefCell<Box<dyn Link>>,
}

/// Owner of one link and one feed, and of the reaction logic between them
///
/// The supervisor holds the only strong handle to its wiring; the
/// routers hold weak back-references, so ownership never cycles and the
/// services are guaranteed to die with the supervisor.
pub struct Supervisor {
    wiring: Rc<Wiring>,
    poll_interval: Duration,
    state: RunState,
}

impl Supervisor {
    /// Create a supervisor owning the stock null services
    pub fn new(poll_interval: Duration) -> Self {
        debug!(?poll_interval, "Supervisor::new: using null services");
        Self::with_factories(
            |events| Box::new(NullLink::new(events)) as Box<dyn Link>,
            |events| Box::new(NullFeed::new(events)) as Box<dyn Feed>,
            poll_interval,
        )
    }

    /// Create a supervisor with caller-supplied service factories
    ///
    /// Each factory receives the receiver the supervisor wired for that
    /// service and must return the service owning it. This is the seam
    /// tests use to substitute observable services; the wiring logic is
    /// identical on both construction paths.
    pub fn with_factories<L, F>(make_link: L, make_feed: F, poll_interval: Duration) -> Self
    where
        L: FnOnce(Box<dyn LinkEvents>) -> Box<dyn Link>,
        F: FnOnce(Box<dyn FeedEvents>) -> Box<dyn Feed>,
    {
        let wiring = Rc::new_cyclic(|wiring| {
            let link = make_link(Box::new(LinkRouter::new(wiring.clone())));
            let feed = make_feed(Box::new(FeedRouter::new(wiring.clone())));
            Wiring {
                feed: RefCell::new(feed),
                link: RefCell::new(link),
            }
        });
        debug!("Supervisor::with_factories: services constructed and wired");

        Self {
            wiring,
            poll_interval,
            state: RunState::Constructed,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run both services once before the loop starts
    fn prime(&mut self) {
        debug!("Supervisor::prime: running both services once");
        self.wiring.link.borrow_mut().transmit();
        self.wiring.feed.borrow_mut().sample();
        self.state = RunState::Initialized;
        debug!(state = ?self.state, "Supervisor::prime: done");
    }

    /// Block until the stop flag is set, then return the exit status
    ///
    /// Primes both services, then checks the flag every poll interval.
    /// The flag is checked before the first sleep, so a pre-set flag
    /// returns without waiting. Consuming `self` makes the supervisor
    /// single-use: there is no path back out of [`RunState::Stopped`].
    pub fn run(mut self, stop: &AtomicBool) -> i32 {
        self.prime();

        self.state = RunState::Running;
        info!(poll_interval = ?self.poll_interval, "Supervisor running");

        while !stop.load(Ordering::SeqCst) {
            thread::sleep(self.poll_interval);
        }

        self.state = RunState::Stopped;
        info!("Stop flag observed, supervisor shutting down");
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingLink {
        calls: Rc<Cell<u32>>,
    }

    impl Link for CountingLink {
        fn transmit(&mut self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    struct CountingFeed {
        calls: Rc<Cell<u32>>,
    }

    impl Feed for CountingFeed {
        fn sample(&mut self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    /// Counting substitutes plus the receivers their factories were handed
    struct Harness {
        supervisor: Supervisor,
        link_calls: Rc<Cell<u32>>,
        feed_calls: Rc<Cell<u32>>,
        link_events: Box<dyn LinkEvents>,
        feed_events: Box<dyn FeedEvents>,
    }

    /// Build a supervisor through the factory seam, keeping the
    /// receivers on the test side so events can be triggered directly
    fn harness() -> Harness {
        let link_calls = Rc::new(Cell::new(0));
        let feed_calls = Rc::new(Cell::new(0));
        let link_slot: Rc<RefCell<Option<Box<dyn LinkEvents>>>> = Rc::new(RefCell::new(None));
        let feed_slot: Rc<RefCell<Option<Box<dyn FeedEvents>>>> = Rc::new(RefCell::new(None));

        let supervisor = Supervisor::with_factories(
            {
                let calls = link_calls.clone();
                let slot = link_slot.clone();
                move |events| {
                    *slot.borrow_mut() = Some(events);
                    Box::new(CountingLink { calls }) as Box<dyn Link>
                }
            },
            {
                let calls = feed_calls.clone();
                let slot = feed_slot.clone();
                move |events| {
                    *slot.borrow_mut() = Some(events);
                    Box::new(CountingFeed { calls }) as Box<dyn Feed>
                }
            },
            DEFAULT_POLL_INTERVAL,
        );

        let link_events = link_slot
            .borrow_mut()
            .take()
            .expect("link factory should receive a receiver");
        let feed_events = feed_slot
            .borrow_mut()
            .take()
            .expect("feed factory should receive a receiver");

        Harness {
            supervisor,
            link_calls,
            feed_calls,
            link_events,
            feed_events,
        }
    }

    #[test]
    fn test_factories_each_receive_a_receiver() {
        // harness() asserts both receivers were handed out; the
        // supervisor itself starts in Constructed
        let h = harness();
        assert_eq!(h.supervisor.state(), RunState::Constructed);
        assert_eq!(h.link_calls.get(), 0);
        assert_eq!(h.feed_calls.get(), 0);
    }

    #[test]
    fn test_peer_lost_drives_exactly_one_sample() {
        let mut h = harness();

        h.link_events.peer_lost();

        assert_eq!(h.feed_calls.get(), 1, "Feed should be sampled once");
        assert_eq!(h.link_calls.get(), 0, "Link must not be re-entered");
    }

    #[test]
    fn test_reading_ready_drives_exactly_one_transmit() {
        let mut h = harness();

        h.feed_events.reading_ready();

        assert_eq!(h.link_calls.get(), 1, "Link should transmit once");
        assert_eq!(h.feed_calls.get(), 0, "Feed must not be re-entered");
    }

    #[test]
    fn test_repeated_events_route_one_to_one() {
        let mut h = harness();

        h.link_events.peer_lost();
        h.link_events.peer_lost();
        h.feed_events.reading_ready();
        h.link_events.peer_lost();

        assert_eq!(h.feed_calls.get(), 3);
        assert_eq!(h.link_calls.get(), 1);
    }

    #[test]
    fn test_run_with_preset_flag_primes_once_and_returns_zero() {
        let h = harness();
        let stop = AtomicBool::new(true);

        let code = h.supervisor.run(&stop);

        assert_eq!(code, 0);
        assert_eq!(h.link_calls.get(), 1, "Prime should transmit exactly once");
        assert_eq!(h.feed_calls.get(), 1, "Prime should sample exactly once");
    }

    #[test]
    fn test_event_after_supervisor_dropped_is_ignored() {
        let mut h = harness();

        drop(h.supervisor);
        h.link_events.peer_lost();
        h.feed_events.reading_ready();

        assert_eq!(h.feed_calls.get(), 0);
        assert_eq!(h.link_calls.get(), 0);
    }

    #[test]
    fn test_default_supervisor_constructs_and_runs() {
        let supervisor = Supervisor::new(DEFAULT_POLL_INTERVAL);
        assert_eq!(supervisor.state(), RunState::Constructed);

        let stop = AtomicBool::new(true);
        assert_eq!(supervisor.run(&stop), 0);
    }
}
