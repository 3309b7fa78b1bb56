//! Observable events for shopdb
//!
//! Events are explicit and typed. Each carries the severity it is
//! logged at.

use std::fmt;

use super::logger::Severity;

/// Observable events in shopdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded and validated
    ConfigLoaded,

    // Store operations
    /// Record file parsed
    StoreLoaded,
    /// Record file unreadable, treated as empty
    StoreReadDegraded,
    /// Record file could not be parsed
    StoreParseFailed,
    /// Record file rewritten
    StoreWritten,
    /// Record file write failed
    StoreWriteFailed,

    // Service operations
    /// New record created
    RecordCreated,
    /// Record removed
    RecordRemoved,
    /// Login accepted
    LoginSucceeded,
    /// Login rejected
    LoginFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreReadDegraded => "STORE_READ_DEGRADED",
            Event::StoreParseFailed => "STORE_PARSE_FAILED",
            Event::StoreWritten => "STORE_WRITTEN",
            Event::StoreWriteFailed => "STORE_WRITE_FAILED",

            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordRemoved => "RECORD_REMOVED",
            Event::LoginSucceeded => "LOGIN_SUCCEEDED",
            Event::LoginFailed => "LOGIN_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreLoaded => Severity::Trace,
            Event::StoreReadDegraded | Event::LoginFailed => Severity::Warn,
            Event::StoreParseFailed | Event::StoreWriteFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
