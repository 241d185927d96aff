//! Crosswire - owner-wired service supervisor
//!
//! Crosswire is a small foreground daemon that owns two callback-driven
//! services - an outbound [`Link`] and a data [`Feed`] - and defines, at
//! construction time, how each service's events route into the sibling
//! service. The services never learn who owns them: each one is handed a
//! boxed event receiver when it is built and decides on its own when to
//! invoke it.
//!
//! # Core Concepts
//!
//! - **Owner-defined reactions**: the supervisor, not the service,
//!   decides what happens on `peer_lost` or `reading_ready`
//! - **Receivers are mandatory**: no service can be constructed without
//!   its event receiver
//! - **Factory seam**: tests substitute observable services without
//!   touching the wiring logic
//! - **Signal-driven shutdown**: the run loop polls one atomic flag set
//!   from the termination-signal handler
//!
//! # Modules
//!
//! - [`services`] - service and receiver contracts plus stock implementations
//! - [`supervisor`] - the owning process and its event routing
//! - [`shutdown`] - stop flag and signal wiring
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod services;
pub mod shutdown;
pub mod supervisor;

// Re-export commonly used types
pub use config::{Config, LogConfig, SupervisorConfig};
pub use services::{Feed, FeedEvents, Link, LinkEvents, NullFeed, NullLink};
pub use shutdown::{install_signal_handlers, request_stop, stop_flag};
pub use supervisor::{DEFAULT_POLL_INTERVAL, RunState, Supervisor};
