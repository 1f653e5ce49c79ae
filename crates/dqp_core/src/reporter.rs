//! The logging/reporting capability passed through the pipeline.
//!
//! Pipeline stages report through a [`Reporter`] instead of a process-wide
//! logger, so tests can substitute a capturing implementation and observe
//! exactly what a stage emitted.

use std::sync::Mutex;

/// Structured event sink for pipeline stages.
///
/// Milestone events mark pipeline boundaries (start/finish of a run) and are
/// emphasized on the console; the emphasis is presentation-only and carries
/// no behavioral contract.
pub trait Reporter: Send + Sync {
    /// Informational event.
    fn info(&self, message: &str);

    /// Warning event (data quality findings, skipped input lines).
    fn warn(&self, message: &str);

    /// Error event (faults).
    fn error(&self, message: &str);

    /// Milestone event, emphasized for console readability.
    fn milestone(&self, message: &str) {
        self.info(message);
    }
}

/// Reporter backed by the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    /// Creates a new tracing-backed reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn milestone(&self, message: &str) {
        tracing::info!("********** {message} **********");
    }
}

/// Severity of a captured event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    /// Captured via [`Reporter::info`]
    Info,
    /// Captured via [`Reporter::warn`]
    Warn,
    /// Captured via [`Reporter::error`]
    Error,
    /// Captured via [`Reporter::milestone`]
    Milestone,
}

/// Reporter that records events in memory, for test substitution.
#[derive(Debug, Default)]
pub struct CapturingReporter {
    events: Mutex<Vec<(EventLevel, String)>>,
}

impl CapturingReporter {
    /// Creates an empty capturing reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all captured events in emission order.
    pub fn events(&self) -> Vec<(EventLevel, String)> {
        self.events.lock().expect("reporter poisoned").clone()
    }

    /// Returns the messages captured at the given level.
    pub fn messages_at(&self, level: EventLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: EventLevel, message: &str) {
        self.events
            .lock()
            .expect("reporter poisoned")
            .push((level, message.to_string()));
    }
}

impl Reporter for CapturingReporter {
    fn info(&self, message: &str) {
        self.push(EventLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(EventLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(EventLevel::Error, message);
    }

    fn milestone(&self, message: &str) {
        self.push(EventLevel::Milestone, message);
    }
}
