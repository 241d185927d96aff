//! The owning process and its event routing
//!
//! The supervisor owns exactly one [`Link`](crate::services::Link) and
//! one [`Feed`](crate::services::Feed) and defines the cross-wiring
//! between their events: a lost peer pokes the feed, a fresh reading
//! goes out over the link. The routing lives in receiver implementations
//! private to this module; service implementations only ever see the
//! [`LinkEvents`](crate::services::LinkEvents) /
//! [`FeedEvents`](crate::services::FeedEvents) contracts.

mod core;
mod routing;

pub use core::{DEFAULT_POLL_INTERVAL, RunState, Supervisor};
