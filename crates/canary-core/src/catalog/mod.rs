//! Label catalog: the deduplicated set of filter facets derived from a check collection.
//!
//! Checks are visited in input order and each check's labels in their map order.
//! The first occurrence of a `canary:key:value` id wins; later duplicates are dropped.
use canary_model::{Check, Label};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::{context::EngineContext, error::CoreError};

/// Extract the label catalog from a check collection.
///
/// Output order is the order of first occurrence. Checks without labels contribute nothing.
pub fn extract(checks: &[Check]) -> Vec<Label> {
    let mut seen: IndexMap<String, Label> = IndexMap::new();

    for labels in checks.iter().filter_map(|c| c.labels.as_ref()) {
        for (key, value) in labels.iter() {
            let label = Label::canary(key, value);
            seen.entry(label.id().to_string()).or_insert(label);
        }
    }
    seen.into_values().collect()
}

/// Decode a JSON value into a check collection.
///
/// Anything other than an array is rejected with [`CoreError::InvalidInput`];
/// an array whose elements do not decode yields [`CoreError::Decode`].
pub fn decode_checks(value: &Value) -> Result<Vec<Check>, CoreError> {
    if !value.is_array() {
        return Err(CoreError::InvalidInput(json_kind(value).to_string()));
    }
    Ok(Vec::<Check>::deserialize(value)?)
}

/// Result of extracting a catalog from untyped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Input was a valid check collection; the list may be empty.
    Labels(Vec<Label>),
    /// Input was not a check collection; a diagnostic has been reported.
    Invalid,
}

impl CatalogOutcome {
    /// Labels to display; empty for invalid input.
    pub fn labels(&self) -> &[Label] {
        match self {
            CatalogOutcome::Labels(labels) => labels,
            CatalogOutcome::Invalid => &[],
        }
    }

    pub fn into_labels(self) -> Vec<Label> {
        match self {
            CatalogOutcome::Labels(labels) => labels,
            CatalogOutcome::Invalid => Vec::new(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CatalogOutcome::Invalid)
    }
}

/// Catalog component bound to an [`EngineContext`].
///
/// Adds metrics and fail-soft diagnostics on top of [`extract`].
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    ctx: EngineContext,
}

impl LabelCatalog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context used for diagnostics and metrics.
    #[inline]
    pub fn with_context(mut self, ctx: EngineContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Extract the catalog from a typed check collection.
    #[instrument(level = "debug", skip_all, fields(checks = checks.len()))]
    pub fn extract(&self, checks: &[Check]) -> Vec<Label> {
        let labels = extract(checks);
        self.ctx.metrics().record_catalog(labels.len());
        debug!(labels = labels.len(), "label catalog extracted");
        labels
    }

    /// Decode untyped JSON input into checks.
    ///
    /// Malformed input is reported once through the diagnostics sink and yields `None`.
    pub fn decode_json(&self, value: &Value) -> Option<Vec<Check>> {
        match decode_checks(value) {
            Ok(checks) => Some(checks),
            Err(err) => {
                trace!(error = %err, "catalog input rejected");
                self.ctx.metrics().record_invalid_input(err.as_label());
                self.ctx
                    .diagnostics()
                    .invalid_input("unknown check format", value);
                None
            }
        }
    }

    /// Extract the catalog from untyped JSON input.
    ///
    /// Never fails: malformed input is reported through [`LabelCatalog::decode_json`] and yields [`CatalogOutcome::Invalid`].
    pub fn extract_json(&self, value: &Value) -> CatalogOutcome {
        match self.decode_json(value) {
            Some(checks) => CatalogOutcome::Labels(self.extract(&checks)),
            None => CatalogOutcome::Invalid,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
