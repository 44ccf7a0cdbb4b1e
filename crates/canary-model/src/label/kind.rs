use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Origin of a filter facet.
///
/// - `Canary`: derived from a check's own label map; matched against `check.labels`.
/// - `Other`: any facet not derived from check labels; always matches.
///
/// On the wire any unrecognised kind decodes as `Other`, so unknown facets keep
/// their pass-through behaviour instead of failing the whole selection.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    #[default]
    Canary,
    #[serde(other)]
    Other,
}

impl LabelKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Canary => "canary",
            LabelKind::Other => "other",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canary" => Ok(LabelKind::Canary),
            "other" => Ok(LabelKind::Other),
            other => Err(ModelError::UnknownLabelKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::LabelKind;

    #[test]
    fn parses_known_kinds_case_insensitive() {
        assert_eq!(LabelKind::from_str("canary").unwrap(), LabelKind::Canary);
        assert_eq!(LabelKind::from_str(" Canary ").unwrap(), LabelKind::Canary);
        assert_eq!(LabelKind::from_str("OTHER").unwrap(), LabelKind::Other);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(LabelKind::from_str("").is_err());
        assert!(LabelKind::from_str("topology").is_err());
    }

    #[test]
    fn serde_unknown_kind_is_other() {
        let kind: LabelKind = serde_json::from_str(r#""topology""#).unwrap();
        assert_eq!(kind, LabelKind::Other);

        let kind: LabelKind = serde_json::from_str(r#""canary""#).unwrap();
        assert_eq!(kind, LabelKind::Canary);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(LabelKind::Canary.to_string(), "canary");
        assert_eq!(serde_json::to_string(&LabelKind::Other).unwrap(), r#""other""#);
    }
}
