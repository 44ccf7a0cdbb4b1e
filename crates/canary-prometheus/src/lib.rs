//! Prometheus metrics backend for the canary filtering engine.
//!
//! [`PrometheusMetrics`] implements [`canary_core::MetricsBackend`] and is injected through [`canary_core::EngineContext`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use canary_core::{CheckFilter, EngineContext};
//! use canary_prometheus::{PrometheusMetrics, TextEncoder, Encoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = EngineContext::default().with_metrics(Arc::new(metrics.clone()));
//! let filter = CheckFilter::new().with_context(ctx);
//!
//! let _view = filter.apply(&[], false, &[]);
//!
//! let mut buffer = Vec::new();
//! TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `canary_view_checks_visible` - Gauge, size of the last filtered view
//! - `canary_view_checks_hidden_total{reason}` - Counter
//! - `canary_catalog_labels` - Gauge, size of the last label catalog
//! - `canary_invalid_input_total{error_kind}` - Counter
//!
//! Serving `/metrics` is left to the embedding application.

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
