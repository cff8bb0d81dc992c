//! Line sinks
//!
//! A sink writes one already-formatted line at a time. Callers serialize
//! access; sinks do no locking of their own beyond what the stream needs.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Destination for rendered lines
pub trait Sink: Send {
    /// Write `line` plus a terminator and make it visible immediately
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Standard output, flushed after every line
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// In-memory sink; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_sink_starts_empty() {
        assert!(MemorySink::new().is_empty());
    }
}
