use crate::driver::{ClickSurface, FireResult, PageDriver};
use crate::error::{ErrorCategory, RunError};
use crate::model::{CheckState, SetMethod, SetOutcome, TargetHandle};

/// Click surfaces tried in order before falling back to the forced write.
const CLICK_ESCALATION: [ClickSurface; 2] = [ClickSurface::Input, ClickSurface::Label];

/// Drive one checkbox to the desired logical state.
///
/// Escalation order: no-op when the before-state already satisfies `want`,
/// then a synthetic event burst on the input, then on the ancestor label,
/// then the forced native-setter write. Each click tier is followed by a
/// state re-read; the first tier whose postcondition holds wins. The forced
/// tier is the guaranteed tail and reports `forced` even in the off chance
/// the page re-renders it away again.
///
/// A handle whose element has vanished reports method `none` instead of
/// failing the run.
pub async fn ensure_checked<D: PageDriver + ?Sized>(
    driver: &D,
    handle: &TargetHandle,
    before: &CheckState,
    want: bool,
) -> Result<SetOutcome, RunError> {
    if before.satisfies(want) {
        return Ok(SetOutcome {
            changed: false,
            method: SetMethod::Already,
            after: before.clone(),
        });
    }

    match escalate(driver, handle, want).await {
        Ok(outcome) => Ok(outcome),
        Err(e) if e.category == ErrorCategory::ElementNotFound => Ok(SetOutcome {
            changed: false,
            method: SetMethod::None,
            after: before.clone(),
        }),
        Err(e) => Err(e),
    }
}

async fn escalate<D: PageDriver + ?Sized>(
    driver: &D,
    handle: &TargetHandle,
    want: bool,
) -> Result<SetOutcome, RunError> {
    for surface in CLICK_ESCALATION {
        if driver.fire_sequence(handle, surface).await? == FireResult::NoSurface {
            continue;
        }
        let state = driver.state(handle).await?;
        if state.satisfies(want) {
            let method = match surface {
                ClickSurface::Input => SetMethod::InputClick,
                ClickSurface::Label => SetMethod::LabelClick,
            };
            return Ok(SetOutcome { changed: true, method, after: state });
        }
    }

    driver.force_checked(handle, want).await?;
    let after = driver.state(handle).await?;
    Ok(SetOutcome {
        changed: after.satisfies(want),
        method: SetMethod::Forced,
        after,
    })
}
