use canary_model::Check;

/// Aggregated health of a check.
///
/// - no status history (`None`): unhealthy, health is unknown;
/// - otherwise the AND of every entry's `status`, folded from a `true` seed,
///   so an empty history is healthy.
pub fn is_healthy(check: &Check) -> bool {
    match &check.check_statuses {
        None => false,
        Some(statuses) => statuses.iter().fold(true, |passed, s| passed && s.status),
    }
}
