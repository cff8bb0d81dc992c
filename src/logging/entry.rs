//! Log entry types
//!
//! Core types for representing log records delivered by the transport.

use serde::{Deserialize, Serialize};

/// Severity of a log record
///
/// Wire codes are `0..=4` in declaration order. Anything else is `Unknown`;
/// an unrecognized level is displayed, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LevelRepr", into = "i64")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
}

impl LogLevel {
    /// All levels in display order (legend, tests)
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Unknown,
    ];

    /// Map a wire code to a level
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Unknown,
        }
    }

    /// Map a level name (case-insensitive) to a level
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "WARN" | "WARNING" => Self::Warn,
            "ERROR" => Self::Error,
            "FATAL" => Self::Fatal,
            _ => Self::Unknown,
        }
    }

    /// Wire code; `Unknown` has none and encodes as -1
    pub fn code(self) -> i64 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
            Self::Fatal => 4,
            Self::Unknown => -1,
        }
    }

    /// Upper-case display name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<i64> for LogLevel {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<LogLevel> for i64 {
    fn from(level: LogLevel) -> Self {
        level.code()
    }
}

/// Accepted wire shapes for a level
///
/// `Other` swallows any remaining JSON value (null, floats, out-of-range
/// integers, objects) so the entry still renders.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Code(i64),
    Name(String),
    Other(serde::de::IgnoredAny),
}

impl From<LevelRepr> for LogLevel {
    fn from(repr: LevelRepr) -> Self {
        match repr {
            LevelRepr::Code(code) => Self::from_code(code),
            LevelRepr::Name(name) => Self::from_name(&name),
            LevelRepr::Other(_) => Self::Unknown,
        }
    }
}

/// One delivered log record
///
/// `seq` is assigned by the producer and only used for duplicate
/// suppression; it is not unique across producers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u32,
    pub stamp_sec: i64,
    pub stamp_usec: u32,
    #[serde(default = "unknown_level")]
    pub level: LogLevel,
    #[serde(default)]
    pub node_name: String,
    #[serde(default)]
    pub message: String,
}

fn unknown_level() -> LogLevel {
    LogLevel::Unknown
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time
    pub fn now(
        seq: u32,
        level: LogLevel,
        node_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now();
        Self {
            seq,
            stamp_sec: now.timestamp(),
            stamp_usec: now.timestamp_subsec_micros(),
            level,
            node_name: node_name.into(),
            message: message.into(),
        }
    }
}
