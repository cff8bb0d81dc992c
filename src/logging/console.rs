//! Log console
//!
//! The per-entry callback registered with the transport. Admission check
//! and rendering happen under one lock so that concurrent deliveries see a
//! consistent watermark and lines never interleave.

use super::{format, AdmissionFilter, LogEntry, Sink};
use crate::error::{Result, TailError};
use crate::transport::Consumer;
use parking_lot::Mutex;
use tracing::trace;

struct ConsoleState<S> {
    filter: AdmissionFilter,
    sink: S,
}

/// Deduplicating console renderer
///
/// Construct once at startup and share it (`Arc`) with the transport.
pub struct LogConsole<S: Sink> {
    state: Mutex<ConsoleState<S>>,
}

impl<S: Sink> LogConsole<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                filter: AdmissionFilter::new(),
                sink,
            }),
        }
    }

    /// Admit and render one entry
    ///
    /// Returns `Ok(false)` when the entry was dropped as a duplicate.
    /// A sink failure is returned as `TailError::Output`.
    pub fn handle(&self, entry: &LogEntry) -> Result<bool> {
        let mut state = self.state.lock();

        if !state.filter.accept(entry.seq) {
            trace!(
                seq = entry.seq,
                watermark = state.filter.watermark(),
                "dropping stale entry"
            );
            return Ok(false);
        }

        let line = format::format_line(entry);
        state
            .sink
            .write_line(&line)
            .map_err(|source| TailError::Output { source })?;
        Ok(true)
    }

    /// Current admission watermark
    pub fn watermark(&self) -> u32 {
        self.state.lock().filter.watermark()
    }
}

impl<S: Sink> Consumer for LogConsole<S> {
    fn consume(&self, entry: LogEntry) -> Result<()> {
        self.handle(&entry).map(|_| ())
    }
}
