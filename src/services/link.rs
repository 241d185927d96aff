//! Outbound link service
//!
//! A link pushes the process's current data out to connected peers.
//! Implementations report peer loss through the [`LinkEvents`] receiver
//! they were built with; when that happens is entirely the
//! implementation's call.

use tracing::debug;

/// Events a link implementation may raise
pub trait LinkEvents {
    /// A previously connected peer became unreachable
    fn peer_lost(&mut self);
}

/// Contract for outbound link services
///
/// A link is always constructed with an owned [`LinkEvents`] receiver;
/// no receiver-less construction path exists on any implementation in
/// this crate.
pub trait Link {
    /// Push the current data out to peers
    fn transmit(&mut self);
}

/// Inert link: holds its receiver, never raises events, sends nothing
pub struct NullLink {
    #[allow(dead_code)]
    events: Box<dyn LinkEvents>,
}

impl NullLink {
    /// Create a null link owning the given receiver
    pub fn new(events: Box<dyn LinkEvents>) -> Self {
        debug!("NullLink::new: created");
        Self { events }
    }
}

impl Link for NullLink {
    fn transmit(&mut self) {
        debug!("NullLink::transmit: no peers, nothing to send");
    }
}
