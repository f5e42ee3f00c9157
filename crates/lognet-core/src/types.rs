//! Core types for the logging service.
//!
//! This module provides:
//! - [`LogLevel`] — Conventional severity names
//! - [`LogEntry`] — A submitted log record (the wire format)
//! - [`Log`] — The rendered, server-side form of an accepted entry
//! - [`ApiSettings`] — Shared ping/log path configuration

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used when the server assigns a receive time.
const RENDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Conventional log severity names, ordered from most to least verbose.
///
/// The wire protocol carries levels as plain strings and accepts anything;
/// this enum exists for client-side defaults and callers that want a fixed
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Most verbose, detailed tracing output
    Verbose,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning conditions
    Warning,
    /// Error conditions
    Error,
    /// Unrecoverable conditions
    Critical,
}

impl LogLevel {
    /// Returns the canonical string representation of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VERBOSE" => Ok(Self::Verbose),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// A submitted log record, exactly as it travels on the wire.
///
/// Immutable once created; the level is a free-form string so unknown
/// severities are accepted rather than rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Identifier of the client/service that produced the entry
    pub id: String,
    /// Client-supplied ISO-8601 timestamp
    pub timestamp: String,
    /// Severity as a string (see [`LogLevel`] for the conventional set)
    pub level: String,
    /// The log message
    pub message: String,
}

/// The rendered, server-side form of an accepted entry.
///
/// The timestamp is assigned at receive time from the server's local clock
/// unless one is supplied explicitly; it is a separate value from the
/// client-supplied [`LogEntry::timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    message: String,
    level: String,
    timestamp: String,
}

impl Log {
    /// Creates a log, defaulting the timestamp to the current local time.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        level: impl Into<String>,
        timestamp: Option<String>,
    ) -> Self {
        let timestamp = timestamp.unwrap_or_else(|| {
            Local::now().format(RENDER_TIMESTAMP_FORMAT).to_string()
        });
        Self {
            message: message.into(),
            level: level.into(),
            timestamp,
        }
    }

    /// The log message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity string.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The server-assigned (or explicitly supplied) timestamp.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.timestamp, self.level, self.message)
    }
}

/// Protocol path configuration shared by server and client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Path of the health-check endpoint, without a leading slash.
    pub ping_path: String,
    /// Path of the log-submission endpoint, without a leading slash.
    pub log_path: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            ping_path: "ping".to_string(),
            log_path: "log".to_string(),
        }
    }
}
