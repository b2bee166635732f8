/// Countries ticked by default: EU/EEA plus the handful of extras the
/// allow-list shipped with.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "Austria", "Australia", "Aruba", "Belgium", "Caribbean Netherlands",
    "Canada", "Switzerland", "Curaçao", "Czech Republic", "Germany", "Denmark",
    "Spain", "Finland", "France", "United Kingdom", "Greece", "Croatia",
    "Hungary", "Ireland", "Isle of Man", "Iceland", "Italy", "Japan",
    "Liechtenstein", "Luxembourg", "Monaco", "Montenegro", "Malta", "Netherlands",
    "Norway", "New Zealand", "Poland", "Portugal", "Romania", "Serbia", "Sweden",
    "Slovenia", "Slovakia", "San Marino", "Suriname", "Sint Maarten",
    "U.S. Minor Outlying Islands", "United States", "Vatican City", "Bulgaria",
];

/// Ordered, immutable set of names to hunt for in label text.
///
/// Matching is case-insensitive substring containment. That is loose on
/// purpose: the panel renders labels like "Czech Republic - CZ", and the
/// looseness is what lets a plain country name find them. It also means a
/// name that is a substring of a longer one would match both; with the
/// shipped list that never selects a wrong row, so the policy stands.
#[derive(Debug, Clone)]
pub struct TargetSet {
    names: Vec<String>,
    lowered: Vec<String>,
}

impl TargetSet {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let lowered = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lowered }
    }

    pub fn default_allowlist() -> Self {
        Self::new(DEFAULT_ALLOWLIST.iter().copied())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Does this label text contain any target name?
    pub fn matches(&self, label_text: &str) -> bool {
        self.matched_name(label_text).is_some()
    }

    /// First target name contained in the label text, if any.
    pub fn matched_name(&self, label_text: &str) -> Option<&str> {
        let text = label_text.to_lowercase();
        self.lowered
            .iter()
            .position(|n| text.contains(n.as_str()))
            .map(|i| self.names[i].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_is_case_insensitive() {
        let set = TargetSet::new(["France", "Czech Republic"]);
        assert!(set.matches("FRANCE"));
        assert!(set.matches("  france\n"));
        assert!(!set.matches("Belgium"));
    }

    #[test]
    fn decorated_label_still_matches() {
        let set = TargetSet::new(["Czech Republic"]);
        assert!(set.matches("Czech Republic - CZ"));
        assert_eq!(set.matched_name("Czech Republic - CZ"), Some("Czech Republic"));
    }

    #[test]
    fn partial_overlap_is_kept_loose() {
        // "Austria" sits inside "Austrian Alps"; the policy accepts that.
        let set = TargetSet::new(["Austria"]);
        assert!(set.matches("Austrian Alps"));
    }

    #[test]
    fn default_list_is_complete() {
        let set = TargetSet::default_allowlist();
        assert_eq!(set.len(), 45);
        assert!(set.matches("Curaçao"));
        assert!(set.matches("U.S. Minor Outlying Islands"));
    }
}
