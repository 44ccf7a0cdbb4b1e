//! Filtering and label-aggregation engine for the canary dashboard.
//!
//! Two stateless components operate on a caller-owned collection of [`Check`](canary_model::Check):
//! - [`LabelCatalog`] derives the deduplicated set of selectable labels;
//! - [`CheckFilter`] evaluates health, matches labels and produces the sorted, filtered view.
pub mod catalog;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod metrics;

pub use catalog::{CatalogOutcome, LabelCatalog, decode_checks, extract};
pub use context::EngineContext;
pub use diagnostics::{
    Diagnostics, DiagnosticsHandle, NoOpDiagnostics, TracingDiagnostics, noop_diagnostics,
};
pub use error::CoreError;
pub use filter::{
    CheckFilter, FilterSummary, Selection, filter_checks, index_of, is_healthy, matches_label,
};
pub use metrics::{HiddenReason, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};

pub mod prelude {
    pub use crate::catalog::{CatalogOutcome, LabelCatalog};
    pub use crate::context::EngineContext;
    pub use crate::error::CoreError;
    pub use crate::filter::{CheckFilter, FilterSummary, Selection};
}
