//! Diagnostic sinks for loader progress and failures

use std::sync::{Mutex, PoisonError};

/// How serious a diagnostic message is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Receiver for human-readable loader messages
///
/// Emitting never fails and never blocks the caller on the receiver.
pub trait DiagnosticSink {
    fn emit(&self, severity: Severity, message: &str);
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &D {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message)
    }
}

/// Forwards diagnostics to `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "cloudtxt::loader", "{}", message),
            Severity::Warning => tracing::warn!(target: "cloudtxt::loader", "{}", message),
            Severity::Error => tracing::error!(target: "cloudtxt::loader", "{}", message),
        }
    }
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages emitted so far
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the collected messages
    pub fn take(&self) -> Vec<(Severity, String)> {
        std::mem::take(&mut *self.messages.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.emit(Severity::Info, "first");
        (&sink).emit(Severity::Warning, "second");

        assert_eq!(sink.messages().len(), 2);
        let taken = sink.take();
        assert_eq!(taken[0], (Severity::Info, "first".to_string()));
        assert_eq!(taken[1], (Severity::Warning, "second".to_string()));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: events are dropped silently
        TracingSink.emit(Severity::Error, "nobody listening");
    }
}
