//! Observability subsystem for shopdb
//!
//! Structured JSON logging of typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use shopdb::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::StoreWritten, &[("records", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_pass_default_threshold() {
        assert!(Logger::enabled(Event::StoreWriteFailed.severity()));
        assert!(Logger::enabled(Event::StoreReadDegraded.severity()));
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::StoreReadDegraded, &[("path", "/tmp/items.txt")]);
    }
}
