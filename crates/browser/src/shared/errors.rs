use checkset_core::RunError;

/// Classify a chromiumoxide error by its message text. CDP errors arrive
/// stringly-typed, so this is the best available signal.
pub fn to_run_error(e: impl std::fmt::Display, action: &str) -> RunError {
    let s = e.to_string();
    if s.contains("timeout") || s.contains("Timeout") {
        RunError::timeout_error(format!("{} timed out: {}", action, s))
    } else if s.contains("navigation") || s.contains("Navigation") {
        RunError::navigation_error(format!("{} navigation failed: {}", action, s))
    } else if s.contains("not found") || s.contains("null") {
        RunError::element_not_found(format!("{}: {}", action, s))
    } else {
        RunError::script_error(format!("{} failed: {}", action, s))
    }
}
