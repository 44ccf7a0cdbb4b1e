//! Common model-level constants.
//!
//! Well-known strings shared by label identity and label display logic.

/// Label value that marks a key as a boolean flag.
///
/// A label `debug = "true"` is displayed as plain `debug` instead of `debug: true`.
/// The comparison is exact and case-sensitive: `"True"` or `"TRUE"` are ordinary values.
pub const LABEL_FLAG_VALUE: &str = "true";

/// Separator between the parts of a composite label id (`kind:key:value`).
pub const LABEL_ID_SEPARATOR: &str = ":";
