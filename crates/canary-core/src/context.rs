use std::{fmt, sync::Arc};

use crate::{
    diagnostics::{DiagnosticsHandle, TracingDiagnostics},
    metrics::MetricsHandle,
};

/// Shared capabilities injected into engine components.
///
/// Defaults to [`TracingDiagnostics`] and no-op metrics.
#[derive(Clone)]
pub struct EngineContext {
    diagnostics: DiagnosticsHandle,
    metrics: MetricsHandle,
}

impl EngineContext {
    /// Create a new context with the given capabilities.
    pub fn new(diagnostics: DiagnosticsHandle, metrics: MetricsHandle) -> Self {
        Self {
            diagnostics,
            metrics,
        }
    }

    /// Get a reference to the diagnostics sink.
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    /// Get a clonable handle to the metrics backend.
    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Replace the diagnostics sink and return updated context.
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replace the metrics backend and return updated context.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self {
            diagnostics: Arc::new(TracingDiagnostics),
            metrics: crate::metrics::noop_metrics(),
        }
    }
}

impl fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineContext")
            .field("diagnostics", &"<handle>")
            .field("metrics", &"<handle>")
            .finish()
    }
}
