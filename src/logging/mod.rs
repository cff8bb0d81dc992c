//! Log rendering pipeline
//!
//! - `LogEntry` - Delivered log records
//! - `AdmissionFilter` - Sequence-based duplicate suppression
//! - `format` - Colored console line formatting
//! - `Sink` - Line output (stdout, memory)
//! - `LogConsole` - Per-entry callback tying the above together

pub mod admission;
pub mod console;
pub mod entry;
pub mod format;
pub mod sink;

pub use admission::AdmissionFilter;
pub use console::LogConsole;
pub use entry::{LogEntry, LogLevel};
pub use sink::{MemorySink, Sink, StdoutSink};

/// Initialize internal tracing for diagnostic output
///
/// Diagnostics go to stderr; stdout carries the rendered log stream.
/// Set `verbose` to true for debug-level output.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}
