//! Service contracts and stock implementations
//!
//! Each service exposes exactly one operation and owns exactly one event
//! receiver, injected at construction. The operation/receiver split lets
//! the owner of a service define reaction logic while the service alone
//! decides when an event fires.

pub mod feed;
pub mod link;

pub use feed::{Feed, FeedEvents, NullFeed};
pub use link::{Link, LinkEvents, NullLink};
