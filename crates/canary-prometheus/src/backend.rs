use std::sync::Arc;

use prometheus::{IntCounterVec, IntGauge, Opts, Registry, proto::MetricFamily};

use canary_core::{HiddenReason, MetricsBackend};

/// Prometheus metrics backend for the filtering engine.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `reason`: "passing", "label_mismatch"
/// - `error_kind`: "invalid_input", "decode"
#[derive(Clone)]
pub struct PrometheusMetrics {
    view_visible: IntGauge,
    view_hidden: IntCounterVec,
    catalog_labels: IntGauge,
    invalid_input: IntCounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering into the given registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let view_visible = IntGauge::with_opts(
            Opts::new("view_checks_visible", "Checks visible in the last filtered view")
                .namespace("canary"),
        )?;
        registry.register(Box::new(view_visible.clone()))?;

        let view_hidden = IntCounterVec::new(
            Opts::new("view_checks_hidden_total", "Checks hidden by filters").namespace("canary"),
            &["reason"],
        )?;
        registry.register(Box::new(view_hidden.clone()))?;

        let catalog_labels = IntGauge::with_opts(
            Opts::new("catalog_labels", "Labels in the last extracted catalog").namespace("canary"),
        )?;
        registry.register(Box::new(catalog_labels.clone()))?;

        let invalid_input = IntCounterVec::new(
            Opts::new("invalid_input_total", "Malformed inputs handed to the catalog")
                .namespace("canary"),
            &["error_kind"],
        )?;
        registry.register(Box::new(invalid_input.clone()))?;

        Ok(Self {
            view_visible,
            view_hidden,
            catalog_labels,
            invalid_input,
            registry,
        })
    }

    /// Create a backend with a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_view(&self, visible: usize) {
        self.view_visible.set(to_i64(visible));
    }

    fn record_hidden(&self, reason: HiddenReason, count: usize) {
        self.view_hidden
            .with_label_values(&[reason.as_label()])
            .inc_by(count as u64);
    }

    fn record_catalog(&self, labels: usize) {
        self.catalog_labels.set(to_i64(labels));
    }

    fn record_invalid_input(&self, error_kind: &str) {
        self.invalid_input.with_label_values(&[error_kind]).inc();
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use canary_core::{CheckFilter, EngineContext, LabelCatalog};
    use canary_model::{Check, Label};

    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn can_create_prometheus_metrics() {
        let _metrics = PrometheusMetrics::new().expect("failed to create metrics");
    }

    #[test]
    fn record_view_sets_gauge() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_view(7);
        metrics.record_view(3);

        assert_eq!(metrics.view_visible.get(), 3);
        let families = metrics.gather();
        assert_eq!(family(&families, "canary_view_checks_visible").get_metric().len(), 1);
    }

    #[test]
    fn record_hidden_counts_per_reason() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_hidden(HiddenReason::Passing, 2);
        metrics.record_hidden(HiddenReason::Passing, 1);
        metrics.record_hidden(HiddenReason::LabelMismatch, 4);

        let families = metrics.gather();
        let hidden = family(&families, "canary_view_checks_hidden_total");
        assert_eq!(hidden.get_metric().len(), 2);

        assert_eq!(metrics.view_hidden.with_label_values(&["passing"]).get(), 3);
        assert_eq!(
            metrics.view_hidden.with_label_values(&["label_mismatch"]).get(),
            4
        );
    }

    #[test]
    fn engine_components_report_through_backend() {
        let metrics = PrometheusMetrics::new().unwrap();
        let ctx = EngineContext::default().with_metrics(Arc::new(metrics.clone()));

        let checks = vec![
            Check::new("a").with_label("env", "prod").with_statuses([true]),
            Check::new("b").with_label("env", "dev"),
        ];
        let labels = LabelCatalog::new().with_context(ctx.clone()).extract(&checks);
        let summary = CheckFilter::new()
            .with_context(ctx)
            .apply(&checks, true, &[Label::canary("env", "prod")]);
        assert!(summary.checks.is_empty());

        assert_eq!(metrics.catalog_labels.get(), labels.len() as i64);
        assert_eq!(metrics.view_visible.get(), 0);
        assert_eq!(metrics.view_hidden.with_label_values(&["passing"]).get(), 1);
        assert_eq!(
            metrics.view_hidden.with_label_values(&["label_mismatch"]).get(),
            1
        );
    }

    #[test]
    fn invalid_input_is_counted() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_invalid_input("invalid_input");
        metrics.record_invalid_input("invalid_input");

        let families = metrics.gather();
        assert_eq!(family(&families, "canary_invalid_input_total").get_metric().len(), 1);
        assert_eq!(
            metrics.invalid_input.with_label_values(&["invalid_input"]).get(),
            2
        );
    }

    #[test]
    fn can_use_custom_registry() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_catalog(1);
        assert!(!registry.gather().is_empty());
    }
}
