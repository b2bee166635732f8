use crate::driver::PageDriver;
use crate::ensure::ensure_checked;
use crate::error::RunError;
use crate::model::{DetailRow, RootReport, RunSummary};
use crate::targets::TargetSet;

/// One full pass: enumerate roots, collect matching checkboxes per root,
/// drive each through the setter chain, aggregate.
///
/// Roots the driver could not reach (cross-origin frames) never show up in
/// `roots()`, so they are excluded without disturbing the rest of the run.
pub async fn run_targets<D: PageDriver + ?Sized>(
    driver: &D,
    targets: &TargetSet,
    want: bool,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();

    for root in driver.roots().await? {
        let snapshots = driver.collect(&root, targets).await?;
        let found = snapshots.len();
        let mut changed = 0;

        for snap in snapshots {
            let outcome = ensure_checked(driver, &snap.handle, &snap.before, want).await?;
            if outcome.changed {
                changed += 1;
            }
            summary.details.push(DetailRow {
                scope: root.scope.clone(),
                name: snap.name,
                before: snap.before,
                after: outcome.after,
                how: outcome.method,
            });
        }

        summary.roots.push(RootReport { scope: root.scope, found, changed });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SetMethod;
    use crate::testing::{ClickReaction, SimCheckbox, SimRoot, SimulatedPage};

    fn allow(names: &[&str]) -> TargetSet {
        TargetSet::new(names.iter().copied())
    }

    #[tokio::test]
    async fn france_scenario_ends_checked() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::labeled("France").reacts(ClickReaction::OnInput),
        ])]);
        let summary = run_targets(&page, &allow(&["France"]), true).await.unwrap();

        assert_eq!(summary.total_found(), 1);
        assert_eq!(summary.total_changed(), 1);
        assert_eq!(summary.details[0].how, SetMethod::InputClick);
        assert!(summary.details[0].after.is_on());
    }

    #[tokio::test]
    async fn france_scenario_without_handlers_is_forced() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::labeled("France"),
        ])]);
        let summary = run_targets(&page, &allow(&["France"]), true).await.unwrap();
        assert_eq!(summary.details[0].how, SetMethod::Forced);
        assert!(summary.details[0].after.is_on());
    }

    #[tokio::test]
    async fn non_matching_labels_stay_out_of_the_report() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::labeled("France"),
            SimCheckbox::labeled("Atlantis"),
        ])]);
        let summary = run_targets(&page, &allow(&["France"]), true).await.unwrap();

        assert_eq!(summary.total_found(), 1);
        assert!(summary.details.iter().all(|d| d.name != "Atlantis"));
    }

    #[tokio::test]
    async fn decorated_label_is_matched_by_substring() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::labeled("Czech Republic - CZ"),
        ])]);
        let summary = run_targets(&page, &allow(&["Czech Republic"]), true).await.unwrap();
        assert_eq!(summary.total_found(), 1);
        assert_eq!(summary.details[0].name, "Czech Republic - CZ");
    }

    #[tokio::test]
    async fn input_behind_two_labels_counts_once() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::with_labels(["Austria", "Australia"]),
        ])]);
        let summary = run_targets(&page, &allow(&["Austria", "Australia"]), true)
            .await
            .unwrap();

        assert_eq!(summary.total_found(), 1);
        assert_eq!(summary.details.len(), 1);
    }

    #[tokio::test]
    async fn totals_sum_across_document_and_iframe() {
        let page = SimulatedPage::new(vec![
            SimRoot::top(vec![
                SimCheckbox::labeled("France").checked(),
                SimCheckbox::labeled("Belgium"),
            ]),
            SimRoot::iframe("iframe#settings", vec![
                SimCheckbox::labeled("Norway").reacts(ClickReaction::OnInput),
            ]),
        ]);
        let summary = run_targets(&page, &allow(&["France", "Belgium", "Norway"]), true)
            .await
            .unwrap();

        assert_eq!(summary.total_found(), 3);
        assert_eq!(summary.total_changed(), 2); // France was already on
        assert_eq!(summary.roots.len(), 2);
        assert_eq!(summary.roots[0].found, 2);
        assert_eq!(summary.roots[1].found, 1);
        assert_eq!(summary.roots[1].scope, "iframe#settings");
    }

    #[tokio::test]
    async fn cross_origin_root_is_skipped_not_fatal() {
        let page = SimulatedPage::new(vec![
            SimRoot::top(vec![SimCheckbox::labeled("France")]),
            SimRoot::iframe("iframe#ads", vec![SimCheckbox::labeled("Belgium")])
                .inaccessible(),
        ]);
        let summary = run_targets(&page, &allow(&["France", "Belgium"]), true)
            .await
            .unwrap();

        assert_eq!(summary.roots.len(), 1);
        assert_eq!(summary.total_found(), 1);
        assert_eq!(summary.details[0].name, "France");
    }

    #[tokio::test]
    async fn vanished_input_is_reported_not_raised() {
        let page = SimulatedPage::new(vec![SimRoot::top(vec![
            SimCheckbox::labeled("Malta").vanished(),
            SimCheckbox::labeled("France"),
        ])]);
        let summary = run_targets(&page, &allow(&["Malta", "France"]), true)
            .await
            .unwrap();

        assert_eq!(summary.total_found(), 2);
        assert_eq!(summary.total_changed(), 1);
        let malta = summary.details.iter().find(|d| d.name == "Malta").unwrap();
        assert_eq!(malta.how, SetMethod::None);
    }
}
