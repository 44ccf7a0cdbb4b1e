use canary_model::{Check, Label, LabelKind};

/// Returns `true` if the check satisfies any of the selected labels.
///
/// An empty selection matches everything. Per label:
/// - non-canary labels always match;
/// - a check without a label map matches every canary label;
/// - otherwise `check.labels[key]` must equal the label value.
pub fn matches_label(check: &Check, selected: &[Label]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|label| match label.kind() {
        LabelKind::Other => true,
        LabelKind::Canary => match &check.labels {
            None => true,
            Some(labels) => labels.has(label.key(), label.value()),
        },
    })
}
