//! Structured JSON logger
//!
//! One log line per event, written synchronously with no buffering. Keys
//! are ordered deterministically: `event` first, `severity` second, then
//! the fields sorted alphabetically. INFO and WARN go to stdout, ERROR to
//! stderr.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Routine operations
    Info,
    /// Rejected requests and recoverable issues
    Warn,
    /// Failed operations
    Error,
}

impl Severity {
    /// Wire name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured logger that outputs one JSON line per event.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    ///
    /// ERROR lines go to stderr, everything else to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        match severity {
            Severity::Error => Self::write_line(&mut io::stderr(), severity, event, fields),
            _ => Self::write_line(&mut io::stdout(), severity, event, fields),
        }
    }

    /// Render one line into the writer
    fn write_line<W: Write>(
        writer: &mut W,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
    ) {
        // Build the JSON by hand so key ordering stays deterministic
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut ordered = fields.to_vec();
        ordered.sort_by_key(|entry| entry.0);

        for (key, value) in ordered {
            line.push_str(",\"");
            Self::escape_into(&mut line, key);
            line.push_str("\":\"");
            Self::escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write_all call keeps the line intact across threads
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Escape a raw string into the output buffer per JSON string rules
    fn escape_into(line: &mut String, raw: &str) {
        use std::fmt::Write as _;

        for c in raw.chars() {
            match c {
                '"' | '\\' => {
                    line.push('\\');
                    line.push(c);
                }
                '\n' => line.push_str("\\n"),
                '\r' => line.push_str("\\r"),
                '\t' => line.push_str("\\t"),
                _ if c.is_control() => {
                    let _ = write!(line, "\\u{:04x}", c as u32);
                }
                _ => line.push(c),
            }
        }
    }
}

/// Render a log line to a string for assertions
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::write_line(&mut buffer, severity, event, fields);
    String::from_utf8(buffer).unwrap()
}
