use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    LABEL_FLAG_VALUE, LABEL_ID_SEPARATOR, LabelKind,
    error::{ModelError, ModelResult},
};

/// Display text for a label pair.
///
/// Flag labels (value exactly `"true"`) collapse to the key; everything else is `key: value`.
pub fn display_text(key: &str, value: &str) -> String {
    if value == LABEL_FLAG_VALUE {
        key.to_string()
    } else {
        format!("{key}: {value}")
    }
}

/// A selectable filter facet.
///
/// Identity is the composite `id` (`kind:key:value`): two labels with the same id
/// are the same facet no matter how many checks carry the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLabel")]
pub struct Label {
    kind: LabelKind,
    id: String,
    key: String,
    value: String,
    display_text: String,
}

impl Label {
    /// Create a label of the given kind; the id and display text are derived.
    pub fn new<K, V>(kind: LabelKind, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        Self {
            id: compose_id(kind, &key, &value),
            display_text: display_text(&key, &value),
            kind,
            key,
            value,
        }
    }

    /// Create a canary label (`canary:key:value`).
    pub fn canary<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(LabelKind::Canary, key, value)
    }

    /// Create a non-canary label; it matches every check.
    pub fn other<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(LabelKind::Other, key, value)
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    /// Composite identity key.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text shown on the filter chip.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Returns `true` if the value is the boolean-flag marker.
    pub fn is_flag(&self) -> bool {
        self.value == LABEL_FLAG_VALUE
    }
}

/// Parses a `key=value` selector into a canary label.
impl FromStr for Label {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(Label::canary(key.trim(), value.trim()))
            }
            _ => Err(ModelError::InvalidSelector(s.to_string())),
        }
    }
}

fn compose_id(kind: LabelKind, key: &str, value: &str) -> String {
    [kind.as_str(), key, value].join(LABEL_ID_SEPARATOR)
}

/// Wire shape accepted for selected labels.
///
/// Only `kind`, `key` and `value` are required; a missing `id` or display text is derived.
/// The legacy `type` and `label` field names are accepted as aliases.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLabel {
    #[serde(alias = "type")]
    kind: LabelKind,
    #[serde(default)]
    id: Option<String>,
    key: String,
    value: String,
    #[serde(default, alias = "label")]
    display_text: Option<String>,
}

impl From<RawLabel> for Label {
    fn from(raw: RawLabel) -> Self {
        let id = raw
            .id
            .unwrap_or_else(|| compose_id(raw.kind, &raw.key, &raw.value));
        let display_text = raw
            .display_text
            .unwrap_or_else(|| display_text(&raw.key, &raw.value));
        Self {
            kind: raw.kind,
            id,
            key: raw.key,
            value: raw.value,
            display_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canary_label_derives_id_and_text() {
        let label = Label::canary("env", "prod");
        assert_eq!(label.kind(), LabelKind::Canary);
        assert_eq!(label.id(), "canary:env:prod");
        assert_eq!(label.display_text(), "env: prod");
        assert!(!label.is_flag());
    }

    #[test]
    fn flag_value_collapses_display_text() {
        let label = Label::canary("debug", "true");
        assert_eq!(label.display_text(), "debug");
        assert!(label.is_flag());

        let label = Label::canary("debug", "True");
        assert_eq!(label.display_text(), "debug: True");
    }

    #[test]
    fn id_keeps_separators_inside_parts() {
        let label = Label::canary("url", "http://x");
        assert_eq!(label.id(), "canary:url:http://x");
    }

    #[test]
    fn parses_selector() {
        let label: Label = "env=prod".parse().unwrap();
        assert_eq!(label, Label::canary("env", "prod"));

        let label: Label = "flag=".parse().unwrap();
        assert_eq!(label.value(), "");

        assert!("env".parse::<Label>().is_err());
        assert!("=prod".parse::<Label>().is_err());
    }

    #[test]
    fn serializes_full_shape() {
        let json = serde_json::to_value(Label::canary("debug", "true")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "canary",
                "id": "canary:debug:true",
                "key": "debug",
                "value": "true",
                "displayText": "debug",
            })
        );
    }

    #[test]
    fn deserializes_partial_selection() {
        let label: Label =
            serde_json::from_str(r#"{"type": "canary", "key": "env", "value": "prod"}"#).unwrap();
        assert_eq!(label, Label::canary("env", "prod"));
    }

    #[test]
    fn deserialize_keeps_explicit_id() {
        let label: Label = serde_json::from_str(
            r#"{"kind": "topology", "id": "topo:1", "key": "t", "value": "1"}"#,
        )
        .unwrap();
        assert_eq!(label.kind(), LabelKind::Other);
        assert_eq!(label.id(), "topo:1");
    }

    #[test]
    fn deserialize_requires_key_and_value() {
        assert!(serde_json::from_str::<Label>(r#"{"kind": "canary", "key": "env"}"#).is_err());
        assert!(serde_json::from_str::<Label>(r#"{"kind": "canary", "value": "x"}"#).is_err());
    }
}
