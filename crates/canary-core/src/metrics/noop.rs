use crate::metrics::backend::{HiddenReason, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_view(&self, _: usize) {}

    #[inline(always)]
    fn record_hidden(&self, _: HiddenReason, _: usize) {}

    #[inline(always)]
    fn record_catalog(&self, _: usize) {}

    #[inline(always)]
    fn record_invalid_input(&self, _: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn noop_can_be_called_repeatedly() {
        let metrics = NoOpMetrics;
        for _ in 0..1000 {
            metrics.record_view(10);
            metrics.record_hidden(HiddenReason::Passing, 3);
            metrics.record_catalog(5);
            metrics.record_invalid_input("invalid_input");
        }
    }
}
