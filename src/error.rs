//! Centralized error types
//!
//! All errors are represented by the `TailError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, TailError>`.
//!
//! Duplicate sequences and unknown levels are not errors; they are
//! absorbed where they are detected.

use std::fmt;

/// All log-tail errors
#[derive(Debug)]
pub enum TailError {
    // === Network ===
    /// Failed to bind the receiver socket
    Bind {
        addr: String,
        source: std::io::Error,
    },

    // === Threads ===
    /// Failed to spawn the receiver thread
    Spawn { source: std::io::Error },

    // === Output ===
    /// Writing to the console failed; rendering cannot continue
    Output { source: std::io::Error },
}

impl std::error::Error for TailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind { source, .. } | Self::Spawn { source } | Self::Output { source } => {
                Some(source)
            }
        }
    }
}

impl fmt::Display for TailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind { addr, .. } => write!(f, "Cannot bind UDP socket {}", addr),
            Self::Spawn { .. } => write!(f, "Cannot spawn receiver thread"),
            Self::Output { source } => write!(f, "Console output failed: {}", source),
        }
    }
}

/// Alias for Result with TailError
pub type Result<T> = std::result::Result<T, TailError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_bind_error_display() {
        let err = TailError::Bind {
            addr: "127.0.0.1:9100".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert_eq!(err.to_string(), "Cannot bind UDP socket 127.0.0.1:9100");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_output_error_keeps_source() {
        let err = TailError::Output {
            source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        };
        assert!(err.to_string().starts_with("Console output failed"));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("broken pipe"));
    }
}
