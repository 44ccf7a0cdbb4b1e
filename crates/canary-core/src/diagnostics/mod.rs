//! Reporter capability for malformed engine input.
//!
//! The engine never fails on bad input; it reports through an injected [`Diagnostics`]
//! implementation and degrades to an empty result.
use std::sync::Arc;

use serde_json::Value;
use tracing::error;

/// Sink for fail-soft diagnostics.
pub trait Diagnostics: Send + Sync + 'static {
    /// Report malformed input.
    ///
    /// # Arguments
    /// - `message`: Single-line, human-readable description
    /// - `value`: The offending input
    fn invalid_input(&self, message: &str, value: &Value);
}

/// Shared handle to a diagnostics sink.
pub type DiagnosticsHandle = Arc<dyn Diagnostics>;

/// Emits diagnostics as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn invalid_input(&self, message: &str, value: &Value) {
        error!(value = %value, "{message}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl Diagnostics for NoOpDiagnostics {
    #[inline(always)]
    fn invalid_input(&self, _: &str, _: &Value) {}
}

/// Create a no-op diagnostics handle.
#[inline]
pub fn noop_diagnostics() -> DiagnosticsHandle {
    Arc::new(NoOpDiagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_diagnostics_does_not_panic_without_subscriber() {
        TracingDiagnostics.invalid_input("unknown check format", &Value::Null);
    }

    #[test]
    fn noop_diagnostics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpDiagnostics>(), 0);
    }
}
