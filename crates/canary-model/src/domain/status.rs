use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single pass/fail result in a check's status history.
///
/// Only `status` takes part in health evaluation; the remaining fields are
/// carried through untouched for display and accept any JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatus {
    /// Whether this run passed.
    ///
    /// Missing values decode as `false`; non-boolean values are coerced by truthiness.
    #[serde(default, deserialize_with = "truthy")]
    pub status: bool,

    /// Timestamp of the run, as reported by the collector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,

    /// Run duration, usually milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl CheckStatus {
    /// A passing status entry.
    pub fn passed() -> Self {
        Self {
            status: true,
            ..Default::default()
        }
    }

    /// A failing status entry.
    pub fn failed() -> Self {
        Self::default()
    }
}

impl From<bool> for CheckStatus {
    fn from(status: bool) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

/// Decode any JSON value into a bool using loose truthiness.
///
/// `null`, `false`, `0`, `NaN` and `""` are false; everything else is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
