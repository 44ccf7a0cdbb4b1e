use std::sync::Arc;

/// Why a check was left out of a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenReason {
    /// Healthy check hidden by the "hide passing" flag.
    Passing,
    /// Check matched none of the selected labels.
    LabelMismatch,
}

impl HiddenReason {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            HiddenReason::Passing => "passing",
            HiddenReason::LabelMismatch => "label_mismatch",
        }
    }
}

/// Backend metrics collection interface.
///
/// This trait abstracts metrics collection across different backends.
/// Implementations are injected via [`crate::EngineContext`] and used by both engine components.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record the size of a freshly produced filtered view.
    ///
    /// # Arguments
    /// - `visible`: Number of checks that survived filtering
    fn record_view(&self, visible: usize);
    /// Record checks excluded from a view.
    ///
    /// Called once per reason per view, only when `count > 0`.
    ///
    /// # Arguments
    /// - `reason`: Which rule excluded the checks
    /// - `count`: How many checks it excluded
    fn record_hidden(&self, reason: HiddenReason, count: usize);
    /// Record the size of a freshly extracted label catalog.
    fn record_catalog(&self, labels: usize);
    /// Record malformed input handed to the catalog.
    ///
    /// # Arguments
    /// - `error_kind`: Error category (see [`crate::CoreError::as_label`])
    fn record_invalid_input(&self, error_kind: &str);
}

/// Shared handle to metrics backend.
///
/// Stored in [`crate::EngineContext`] and shared by every component built from it.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
