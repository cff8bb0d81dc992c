//! Transport abstraction for log delivery
//!
//! Separates delivery from rendering:
//! - **Transport**: How entries arrive and get queued (in-process, UDP...)
//! - **Consumer**: What happens to each delivered entry (the console)
//!
//! A transport owns a bounded queue. Producers push into it from any
//! thread; `spin_once` drains a limited batch on the caller's thread and
//! hands each entry to the registered consumer in enqueue order.
//!
//! # Adding a new transport
//!
//! 1. Create `transport/my_transport.rs`
//! 2. Feed entries into a `Publisher` from `QueuedTransport::subscribe`
//! 3. Implement `Transport` by delegating `spin_once`

pub mod queue;
pub mod udp;

pub use queue::{Publisher, QueuedTransport};
pub use udp::UdpTransport;

use crate::constants::{DRAIN_LIMIT, LOG_TOPIC, QUEUE_CAPACITY};
use crate::error::Result;
use crate::logging::LogEntry;

/// Receiver of delivered entries
///
/// May be invoked from any thread; implementations serialize internally.
pub trait Consumer: Send + Sync {
    /// Handle one delivered entry
    ///
    /// An error is fatal to the delivery loop.
    fn consume(&self, entry: LogEntry) -> Result<()>;
}

/// Pump for queued deliveries
pub trait Transport {
    /// Deliver pending entries to the consumer, up to the drain limit
    ///
    /// Never blocks. Returns the number of entries delivered.
    fn spin_once(&mut self) -> Result<usize>;
}

/// Subscription parameters declared at registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeOptions {
    /// Channel name (diagnostics only)
    pub topic: String,
    /// Pending entries held before new ones are dropped
    pub queue_capacity: usize,
    /// Entries delivered per `spin_once`
    pub drain_limit: usize,
}

impl Default for SubscribeOptions {
    fn default() -> Self {
        Self {
            topic: LOG_TOPIC.to_string(),
            queue_capacity: QUEUE_CAPACITY,
            drain_limit: DRAIN_LIMIT,
        }
    }
}
