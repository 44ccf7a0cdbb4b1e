//! Metrics collection abstraction for the filtering engine.
//!
//! Metrics backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected via [`crate::EngineContext`].
mod backend;
pub use backend::{HiddenReason, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
