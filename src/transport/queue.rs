//! Bounded in-process delivery queue
//!
//! Backs every transport: producers publish into a bounded channel and the
//! delivery loop drains it with `spin_once`.

use super::{Consumer, SubscribeOptions, Transport};
use crate::error::Result;
use crate::logging::LogEntry;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};
use tracing::debug;

/// Producer handle for a `QueuedTransport`
///
/// Cheap to clone; usable from any thread, no runtime required.
#[derive(Debug, Clone)]
pub struct Publisher {
    tx: mpsc::Sender<LogEntry>,
}

impl Publisher {
    /// Enqueue an entry
    ///
    /// Returns `false` if the entry was dropped because the queue is full
    /// or the transport is gone.
    pub fn publish(&self, entry: LogEntry) -> bool {
        match self.tx.try_send(entry) {
            Ok(()) => true,
            Err(TrySendError::Full(entry)) => {
                debug!(seq = entry.seq, "queue full, dropping entry");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

/// Queue-backed transport with a registered consumer
pub struct QueuedTransport {
    rx: mpsc::Receiver<LogEntry>,
    consumer: Arc<dyn Consumer>,
    options: SubscribeOptions,
}

impl QueuedTransport {
    /// Register `consumer` and create the queue
    ///
    /// The returned `Publisher` feeds the queue.
    pub fn subscribe(options: SubscribeOptions, consumer: Arc<dyn Consumer>) -> (Self, Publisher) {
        let (tx, rx) = mpsc::channel::<LogEntry>(options.queue_capacity.max(1));
        debug!(
            topic = %options.topic,
            capacity = options.queue_capacity,
            drain_limit = options.drain_limit,
            "subscribed"
        );
        (
            Self {
                rx,
                consumer,
                options,
            },
            Publisher { tx },
        )
    }

    pub fn options(&self) -> &SubscribeOptions {
        &self.options
    }
}

impl Transport for QueuedTransport {
    fn spin_once(&mut self) -> Result<usize> {
        let mut delivered = 0;
        while delivered < self.options.drain_limit {
            match self.rx.try_recv() {
                Ok(entry) => {
                    self.consumer.consume(entry)?;
                    delivered += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(delivered)
    }
}
