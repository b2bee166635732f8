use serde::{Deserialize, Serialize};

/// Longest label text carried into a report row.
pub const NAME_TRUNCATE: usize = 50;

/// One traversal origin: the top document or a reachable iframe document.
///
/// `index` 0 is always the top document; iframe roots are numbered in the
/// order the page exposes them. Inaccessible (cross-origin) frames never
/// show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootScope {
    pub index: usize,
    /// "top" or "iframe#<id-or-index>"
    pub scope: String,
}

/// Live checkbox state as read off the element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckState {
    pub checked: bool,
    /// Raw `aria-checked` attribute value, if present.
    pub aria: Option<String>,
}

impl CheckState {
    /// Logical state: the checkbox counts as on when either the property
    /// or the aria mirror says so.
    pub fn is_on(&self) -> bool {
        self.checked || self.aria.as_deref() == Some("true")
    }

    pub fn satisfies(&self, want: bool) -> bool {
        self.is_on() == want
    }
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.checked, self.aria.as_deref().unwrap_or("-"))
    }
}

/// Which strategy ended up satisfying the desired state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetMethod {
    /// State already matched; nothing dispatched.
    Already,
    /// Synthetic event burst on the input itself.
    InputClick,
    /// Synthetic event burst on the ancestor label.
    LabelClick,
    /// Native prototype setter bypass plus explicit aria write.
    Forced,
    /// The element was gone (or never resolved) when we went to set it.
    None,
}

impl std::fmt::Display for SetMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SetMethod::Already => "already",
            SetMethod::InputClick => "input-click",
            SetMethod::LabelClick => "label-click",
            SetMethod::Forced => "forced",
            SetMethod::None => "none",
        };
        f.write_str(s)
    }
}

/// Address of a parked checkbox in the page-side registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetHandle {
    pub root_index: usize,
    pub slot: usize,
}

/// A matched checkbox as returned by collection: where it lives, what the
/// nearest label calls it, and its state at collection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSnapshot {
    #[serde(flatten)]
    pub handle: TargetHandle,
    pub name: String,
    #[serde(flatten)]
    pub before: CheckState,
}

/// Result of driving the setter chain for one checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOutcome {
    pub changed: bool,
    pub method: SetMethod,
    pub after: CheckState,
}

/// One row of the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRow {
    pub scope: String,
    pub name: String,
    pub before: CheckState,
    pub after: CheckState,
    pub how: SetMethod,
}

/// Per-root aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootReport {
    pub scope: String,
    /// Unique matched checkboxes in this root.
    pub found: usize,
    /// How many actually changed state.
    pub changed: usize,
}

/// Whole-run aggregate across every processed root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub roots: Vec<RootReport>,
    pub details: Vec<DetailRow>,
}

impl RunSummary {
    pub fn total_found(&self) -> usize {
        self.roots.iter().map(|r| r.found).sum()
    }

    pub fn total_changed(&self) -> usize {
        self.roots.iter().map(|r| r.changed).sum()
    }
}

/// Trim surrounding whitespace and cap a label text for reporting.
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "(unnamed)".to_string();
    }
    trimmed.chars().take(NAME_TRUNCATE).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_state_honors_property_and_aria() {
        let neither = CheckState { checked: false, aria: None };
        assert!(!neither.is_on());
        assert!(neither.satisfies(false));

        let property_only = CheckState { checked: true, aria: None };
        assert!(property_only.is_on());

        let aria_only = CheckState { checked: false, aria: Some("true".into()) };
        assert!(aria_only.is_on());

        let aria_off = CheckState { checked: false, aria: Some("false".into()) };
        assert!(!aria_off.is_on());
        assert!(!aria_off.satisfies(true));
    }

    #[test]
    fn state_renders_like_the_console_column() {
        let s = CheckState { checked: false, aria: Some("true".into()) };
        assert_eq!(s.to_string(), "false/true");
        let s = CheckState { checked: true, aria: None };
        assert_eq!(s.to_string(), "true/-");
    }

    #[test]
    fn method_labels() {
        assert_eq!(SetMethod::Already.to_string(), "already");
        assert_eq!(SetMethod::InputClick.to_string(), "input-click");
        assert_eq!(SetMethod::LabelClick.to_string(), "label-click");
        assert_eq!(SetMethod::Forced.to_string(), "forced");
        assert_eq!(SetMethod::None.to_string(), "none");
    }

    #[test]
    fn display_name_trims_and_truncates() {
        assert_eq!(display_name("  France \n"), "France");
        assert_eq!(display_name("   "), "(unnamed)");
        let long = "x".repeat(80);
        assert_eq!(display_name(&long).chars().count(), NAME_TRUNCATE);
    }

    #[test]
    fn snapshot_deserializes_from_flat_json() {
        let v = serde_json::json!({
            "root_index": 1,
            "slot": 3,
            "name": "Japan",
            "checked": false,
            "aria": "false"
        });
        let snap: TargetSnapshot = serde_json::from_value(v).unwrap();
        assert_eq!(snap.handle, TargetHandle { root_index: 1, slot: 3 });
        assert_eq!(snap.name, "Japan");
        assert!(!snap.before.is_on());
    }
}
