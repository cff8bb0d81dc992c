//! Application-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Subscription
// =============================================================================

/// Topic the console subscribes to
pub const LOG_TOPIC: &str = "/log";

/// Pending entries the transport may hold before dropping
pub const QUEUE_CAPACITY: usize = 10_000;

/// Maximum entries delivered per spin
pub const DRAIN_LIMIT: usize = 100;

// =============================================================================
// Timing
// =============================================================================

/// Delivery loop iterations per second
pub const SPIN_RATE_HZ: u32 = 1000;

/// Receiver socket read timeout, bounds shutdown latency (milliseconds)
pub const RECEIVER_POLL_TIMEOUT_MS: u64 = 100;

// =============================================================================
// Network
// =============================================================================

/// Default UDP port the log stream is received on
pub const DEFAULT_LOG_PORT: u16 = 9100;

/// Default bind address for the receiver socket
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// UDP receive buffer size (max datagram)
pub const UDP_BUFFER_SIZE: usize = 65_535;
