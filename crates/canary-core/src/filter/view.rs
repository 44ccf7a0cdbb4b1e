use canary_model::{Check, Label};
use tracing::{debug, instrument};

use crate::{
    context::EngineContext,
    filter::{is_healthy, matches_label},
    metrics::HiddenReason,
};

/// Sorted, filtered view of a check collection.
///
/// Checks are borrowed from the input and never copied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSummary<'a> {
    /// Surviving checks, ascending by description.
    pub checks: Vec<&'a Check>,
    /// Healthy checks dropped because passing checks are hidden.
    pub hidden_passing: usize,
    /// Checks dropped because they matched none of the selected labels.
    pub hidden_by_label: usize,
}

impl<'a> FilterSummary<'a> {
    pub fn visible(&self) -> usize {
        self.checks.len()
    }

    pub fn hidden(&self) -> usize {
        self.hidden_passing + self.hidden_by_label
    }
}

/// Sort checks by description and drop the ones hidden by the current filters.
///
/// Sorting is stable, so checks with equal descriptions keep their input order.
/// A check is dropped if `hide_passing` is set and it is healthy, or if it matches none of `selected`.
pub fn filter_checks<'a>(
    checks: &'a [Check],
    hide_passing: bool,
    selected: &[Label],
) -> Vec<&'a Check> {
    summarize(checks, hide_passing, selected).checks
}

fn summarize<'a>(
    checks: &'a [Check],
    hide_passing: bool,
    selected: &[Label],
) -> FilterSummary<'a> {
    let mut sorted: Vec<&Check> = checks.iter().collect();
    sorted.sort_by(|a, b| a.description.cmp(&b.description));

    let mut summary = FilterSummary::default();
    for check in sorted {
        if hide_passing && is_healthy(check) {
            summary.hidden_passing += 1;
            continue;
        }
        if !matches_label(check, selected) {
            summary.hidden_by_label += 1;
            continue;
        }
        summary.checks.push(check);
    }
    summary
}

/// Filter component bound to an [`EngineContext`].
#[derive(Debug, Clone, Default)]
pub struct CheckFilter {
    ctx: EngineContext,
}

impl CheckFilter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context used for metrics.
    #[inline]
    pub fn with_context(mut self, ctx: EngineContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Produce the filtered view together with per-reason hidden counts.
    #[instrument(level = "debug", skip_all, fields(checks = checks.len(), hide_passing = hide_passing, selected = selected.len()))]
    pub fn apply<'a>(
        &self,
        checks: &'a [Check],
        hide_passing: bool,
        selected: &[Label],
    ) -> FilterSummary<'a> {
        let summary = summarize(checks, hide_passing, selected);

        let metrics = self.ctx.metrics();
        metrics.record_view(summary.visible());
        if summary.hidden_passing > 0 {
            metrics.record_hidden(HiddenReason::Passing, summary.hidden_passing);
        }
        if summary.hidden_by_label > 0 {
            metrics.record_hidden(HiddenReason::LabelMismatch, summary.hidden_by_label);
        }

        debug!(
            visible = summary.visible(),
            hidden_passing = summary.hidden_passing,
            hidden_by_label = summary.hidden_by_label,
            "check view filtered"
        );
        summary
    }
}
