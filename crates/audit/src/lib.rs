//! Offline audit of a saved settings-panel snapshot: which targets would
//! match, and what the static checkbox state looks like, without driving
//! a browser.
//!
//! Static HTML carries no live shadow trees or iframe documents, so the
//! audit covers the top document only. It shares the live path's matching
//! policy through [`TargetSet`].

use std::collections::HashSet;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use checkset_core::{display_name, CheckState, RunError, TargetSet};

const CHECKBOX_SELECTOR: &str = r#"input[type="checkbox"][role="checkbox"]"#;

/// One matched label in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Trimmed, capped label text.
    pub name: String,
    /// The target name that matched it.
    pub target: String,
    /// Static state: `checked` attribute presence, raw `aria-checked`.
    pub state: CheckState,
    /// Whether a descendant checkbox input was found at all.
    pub resolvable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub records: Vec<AuditRecord>,
}

impl AuditReport {
    pub fn found(&self) -> usize {
        self.records.len()
    }

    pub fn already_on(&self) -> usize {
        self.records.iter().filter(|r| r.state.is_on()).count()
    }

    /// Plain-text listing, one matched label per line, plus a totals line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for r in &self.records {
            let mark = if !r.resolvable {
                '?'
            } else if r.state.is_on() {
                'x'
            } else {
                ' '
            };
            out.push_str(&format!("[{}] {}  (target: {})\n", mark, r.name, r.target));
        }
        out.push_str(&format!(
            "Snapshot: {} matched, {} already on.\n",
            self.found(),
            self.already_on()
        ));
        out
    }
}

/// Walk every `<label>` in the snapshot, keep the ones whose text contains
/// a target name, resolve the descendant checkbox, and dedup inputs that
/// sit under more than one matching label.
pub fn audit_html(html: &str, targets: &TargetSet) -> Result<AuditReport, RunError> {
    let document = Html::parse_document(html);
    let label_sel =
        Selector::parse("label").map_err(|e| RunError::parsing_error(e.to_string()))?;
    let input_sel =
        Selector::parse(CHECKBOX_SELECTOR).map_err(|e| RunError::parsing_error(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for label in document.select(&label_sel) {
        let text: String = label.text().collect();
        let Some(target) = targets.matched_name(&text) else {
            continue;
        };

        match label.select(&input_sel).next() {
            Some(input) => {
                if !seen.insert(input.id()) {
                    continue;
                }
                let checked = input.value().attr("checked").is_some();
                let aria = input.value().attr("aria-checked").map(str::to_string);
                records.push(AuditRecord {
                    name: display_name(&text),
                    target: target.to_string(),
                    state: CheckState { checked, aria },
                    resolvable: true,
                });
            }
            None => records.push(AuditRecord {
                name: display_name(&text),
                target: target.to_string(),
                state: CheckState::default(),
                resolvable: false,
            }),
        }
    }

    Ok(AuditReport { records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(names: &[&str]) -> TargetSet {
        TargetSet::new(names.iter().copied())
    }

    #[test]
    fn matched_label_with_checkbox_is_reported() {
        let html = r#"
            <div>
              <label>France<input type="checkbox" role="checkbox"></label>
              <label>Atlantis<input type="checkbox" role="checkbox"></label>
            </div>
        "#;
        let report = audit_html(html, &targets(&["France"])).unwrap();
        assert_eq!(report.found(), 1);
        assert_eq!(report.records[0].name, "France");
        assert!(report.records[0].resolvable);
        assert!(!report.records[0].state.is_on());
    }

    #[test]
    fn decorated_label_matches_by_substring() {
        let html = r#"<label>Czech Republic - CZ<input type="checkbox" role="checkbox"></label>"#;
        let report = audit_html(html, &targets(&["Czech Republic"])).unwrap();
        assert_eq!(report.found(), 1);
        assert_eq!(report.records[0].target, "Czech Republic");
    }

    #[test]
    fn static_checked_and_aria_are_read() {
        let html = r#"
            <label>Japan<input type="checkbox" role="checkbox" checked></label>
            <label>Norway<input type="checkbox" role="checkbox" aria-checked="true"></label>
        "#;
        let report = audit_html(html, &targets(&["Japan", "Norway"])).unwrap();
        assert_eq!(report.found(), 2);
        assert_eq!(report.already_on(), 2);
    }

    #[test]
    fn plain_checkbox_without_role_is_not_resolvable() {
        let html = r#"<label>France<input type="checkbox"></label>"#;
        let report = audit_html(html, &targets(&["France"])).unwrap();
        assert_eq!(report.found(), 1);
        assert!(!report.records[0].resolvable);
    }

    #[test]
    fn input_under_two_matching_labels_counts_once() {
        // The outer label's text contains both names; the inner one wraps
        // the same input. Two matching labels, one checkbox.
        let html = r#"
            <label>Austria
              <label>Australia<input type="checkbox" role="checkbox"></label>
            </label>
        "#;
        let report = audit_html(html, &targets(&["Austria", "Australia"])).unwrap();
        assert_eq!(report.found(), 1);
    }

    #[test]
    fn unmatched_labels_never_appear() {
        let html = r#"<label>Mordor<input type="checkbox" role="checkbox"></label>"#;
        let report = audit_html(html, &targets(&["France"])).unwrap();
        assert!(report.records.is_empty());
        assert!(report.render().contains("0 matched"));
    }
}
