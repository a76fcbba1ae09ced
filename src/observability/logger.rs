//! Structured JSON logger
//!
//! - One log line = one event
//! - Key order: `event`, `severity`, `ts`, then caller fields sorted by key
//! - INFO/WARN go to stdout, ERROR/FATAL to stderr
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info = 0,
    Warn = 1,
    Error = 2,
    Fatal = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn uses_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Logs `event` with the current UTC timestamp
    pub fn log(severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = render(severity, event, &ts, fields);

        if severity.uses_stderr() {
            write_line(&mut io::stderr(), &line);
        } else {
            write_line(&mut io::stdout(), &line);
        }
    }

    pub fn info(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    pub fn fatal(event: Event, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Builds one log line, newline included.
fn render(severity: Severity, event: Event, ts: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(128);
    out.push('{');
    push_pair(&mut out, "event", event.as_str());
    out.push(',');
    push_pair(&mut out, "severity", severity.as_str());
    out.push(',');
    push_pair(&mut out, "ts", ts);

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        out.push(',');
        push_pair(&mut out, key, value);
    }

    out.push_str("}\n");
    out
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    // Value's Display produces a quoted, escaped JSON string
    out.push_str(&Value::from(key).to_string());
    out.push(':');
    out.push_str(&Value::from(value).to_string());
}

fn write_line<W: Write>(writer: &mut W, line: &str) {
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}
