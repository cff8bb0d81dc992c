//! Console line formatting
//!
//! Pure functions, no I/O. A rendered line looks like:
//!
//! ```text
//! <color>[2024-01-31 12:00:00.000042] [INFO ] [planner] tick<reset>
//! ```

use super::{LogEntry, LogLevel};
use chrono::{Local, TimeZone};
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

/// Width of the level column
pub const LEVEL_WIDTH: usize = 5;

const MAX_USEC: u32 = 999_999;

/// Escape sequence that starts the colored region for `level`
pub fn level_color(level: LogLevel) -> String {
    match level {
        LogLevel::Debug => SetForegroundColor(Color::DarkBlue).to_string(),
        LogLevel::Info => SetForegroundColor(Color::DarkGreen).to_string(),
        LogLevel::Warn => SetForegroundColor(Color::DarkYellow).to_string(),
        LogLevel::Error => SetForegroundColor(Color::DarkRed).to_string(),
        LogLevel::Fatal => format!(
            "{}{}",
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::DarkRed)
        ),
        LogLevel::Unknown => SetForegroundColor(Color::Grey).to_string(),
    }
}

/// Escape sequence that returns to default colors and attributes
pub fn reset() -> String {
    ResetColor.to_string()
}

/// Local wall-clock time with microsecond fraction
///
/// `YYYY-MM-DD HH:MM:SS.uuuuuu`. The fraction is clamped to six digits.
/// Seconds chrono cannot place in the local zone are printed raw.
pub fn format_timestamp(sec: i64, usec: u32) -> String {
    let usec = usec.min(MAX_USEC);
    match Local.timestamp_opt(sec, 0).earliest() {
        Some(time) => format!("{}.{:06}", time.format("%Y-%m-%d %H:%M:%S"), usec),
        None => format!("{}.{:06}", sec, usec),
    }
}

/// Render one admitted entry as a single colored line (no terminator)
pub fn format_line(entry: &LogEntry) -> String {
    format!(
        "{}[{}] [{:<width$}] [{}] {}{}",
        level_color(entry.level),
        format_timestamp(entry.stamp_sec, entry.stamp_usec),
        entry.level.as_str(),
        entry.node_name,
        entry.message,
        reset(),
        width = LEVEL_WIDTH,
    )
}

/// Static color legend printed at startup
pub fn legend() -> Vec<String> {
    let describe = |level: LogLevel| match level {
        LogLevel::Debug => "Debug information",
        LogLevel::Info => "Informational messages",
        LogLevel::Warn => "Warning messages",
        LogLevel::Error => "Error messages",
        LogLevel::Fatal => "Fatal error messages",
        LogLevel::Unknown => "Unrecognized level",
    };

    let mut lines = vec!["Log Level Colors:".to_string()];
    lines.extend(
        LogLevel::ALL
            .iter()
            .filter(|level| **level != LogLevel::Unknown)
            .map(|&level| {
                format!(
                    "{}  {:<width$}{} - {}",
                    level_color(level),
                    level.as_str(),
                    reset(),
                    describe(level),
                    width = LEVEL_WIDTH,
                )
            }),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(level: LogLevel, node: &str, message: &str) -> LogEntry {
        LogEntry {
            seq: 1,
            stamp_sec: 1_700_000_000,
            stamp_usec: 42,
            level,
            node_name: node.to_string(),
            message: message.to_string(),
        }
    }

    /// Strip the color prefix and reset suffix
    fn plain(line: &str, level: LogLevel) -> &str {
        line.strip_prefix(level_color(level).as_str())
            .and_then(|rest| rest.strip_suffix(reset().as_str()))
            .expect("line is wrapped in color and reset")
    }

    #[test]
    fn test_timestamp_microseconds_padded() {
        let ts = format_timestamp(1_700_000_000, 42);
        assert!(ts.ends_with(".000042"));
        assert_eq!(ts.len(), "2023-11-14 22:13:20.000042".len());
    }

    #[test]
    fn test_timestamp_matches_local_time() {
        let expected = Local
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(
            format_timestamp(1_700_000_000, 999_999),
            format!("{}.999999", expected)
        );
    }

    #[test]
    fn test_timestamp_clamps_microseconds() {
        assert!(format_timestamp(0, 5_000_000).ends_with(".999999"));
    }

    #[test]
    fn test_timestamp_out_of_range_seconds() {
        assert_eq!(format_timestamp(i64::MAX, 1), format!("{}.000001", i64::MAX));
    }

    #[test]
    fn test_line_field_order() {
        let line = format_line(&entry(LogLevel::Info, "planner", "tick"));
        let body = plain(&line, LogLevel::Info);
        let ts = format_timestamp(1_700_000_000, 42);
        assert_eq!(body, format!("[{}] [INFO ] [planner] tick", ts));
    }

    #[test]
    fn test_level_field_is_five_wide() {
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
        ] {
            let line = format_line(&entry(level, "n", "m"));
            let body = plain(&line, level);
            let open = body.find("] [").unwrap() + 3;
            let close = open + body[open..].find(']').unwrap();
            assert_eq!(close - open, LEVEL_WIDTH, "level {:?}", level);
        }
    }

    #[test]
    fn test_unknown_level_rendered_not_truncated() {
        let line = format_line(&entry(LogLevel::Unknown, "n", "m"));
        assert!(line.starts_with(&level_color(LogLevel::Unknown)));
        assert!(line.contains("[UNKNOWN]"));
    }

    #[test]
    fn test_message_passed_through_verbatim() {
        let message = "50% done [ok] {x} \\n \t ünïcödé \x1b[31m";
        let line = format_line(&entry(LogLevel::Debug, "node", message));
        let body = plain(&line, LogLevel::Debug);
        assert!(body.ends_with(message));
    }

    #[test]
    fn test_empty_fields_not_omitted() {
        let line = format_line(&entry(LogLevel::Warn, "", ""));
        let body = plain(&line, LogLevel::Warn);
        assert!(body.ends_with("] [WARN ] [] "));
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: HashSet<String> = LogLevel::ALL.iter().map(|&l| level_color(l)).collect();
        assert_eq!(colors.len(), LogLevel::ALL.len());
    }

    #[test]
    fn test_fatal_is_emphasized_error() {
        let fatal = level_color(LogLevel::Fatal);
        assert!(fatal.starts_with(&SetAttribute(Attribute::Bold).to_string()));
        assert!(fatal.ends_with(&level_color(LogLevel::Error)));
    }

    #[test]
    fn test_reset_is_sgr_zero() {
        assert_eq!(reset(), "\x1b[0m");
    }

    #[test]
    fn test_legend_lists_known_levels() {
        let lines = legend();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("DEBUG"));
        assert!(lines[2].contains("INFO "));
        assert!(lines[5].contains("FATAL"));
        assert!(lines.iter().all(|l| !l.contains("UNKNOWN")));
    }
}
