use serde::{Deserialize, Serialize};

use crate::{CheckStatus, Labels, domain::Description};

/// A monitored entity shown on the dashboard.
///
/// `labels` and `check_statuses` distinguish "absent" (`None`) from "empty":
/// a check without a status history has unknown health, while an empty history is vacuously healthy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sort key for the check list.
    #[serde(default)]
    pub description: Description,

    /// Optional key–value metadata used as filter facets.
    #[serde(default)]
    pub labels: Option<Labels>,

    /// Ordered history of pass/fail results.
    #[serde(default)]
    pub check_statuses: Option<Vec<CheckStatus>>,
}

impl Check {
    /// Create a check with a description, no labels and no status history.
    pub fn new(description: impl Into<Description>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Attach a label, creating the label map if needed.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.get_or_insert_with(Labels::new).insert(key, value);
        self
    }

    /// Replace the status history.
    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CheckStatus>,
    {
        self.check_statuses = Some(statuses.into_iter().map(Into::into).collect());
        self
    }
}
