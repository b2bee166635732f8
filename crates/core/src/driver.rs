use async_trait::async_trait;

use crate::error::RunError;
use crate::model::{CheckState, RootScope, TargetHandle, TargetSnapshot};
use crate::targets::TargetSet;

/// Where a synthetic event burst lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSurface {
    /// The checkbox input itself.
    Input,
    /// The ancestor `<label>`, which often hosts the framework's handler.
    Label,
}

/// What happened when a burst was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// The event sequence was dispatched.
    Fired,
    /// The requested surface does not exist (input with no ancestor label).
    NoSurface,
}

/// The seam between the ensure-checked logic and a concrete page.
///
/// Implementations: the chromium driver in `checkset_browser`, and the
/// in-memory [`SimulatedPage`](crate::testing::SimulatedPage) for tests.
/// Methods addressing a [`TargetHandle`] return an
/// [`ElementNotFound`](crate::ErrorCategory::ElementNotFound) error when the
/// parked element has vanished; callers translate that into the `none`
/// method rather than aborting the run.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Enumerate reachable traversal roots. Index 0 is the top document;
    /// cross-origin iframes are already excluded.
    async fn roots(&self) -> Result<Vec<RootScope>, RunError>;

    /// Find every unique checkbox under a root whose label text matches a
    /// target name, park each in the registry, and snapshot its state.
    async fn collect(
        &self,
        root: &RootScope,
        targets: &TargetSet,
    ) -> Result<Vec<TargetSnapshot>, RunError>;

    /// Dispatch the synthetic pointer/mouse/focus/click/input/change burst
    /// on the given surface of a parked checkbox.
    async fn fire_sequence(
        &self,
        handle: &TargetHandle,
        surface: ClickSurface,
    ) -> Result<FireResult, RunError>;

    /// Re-read the live state of a parked checkbox.
    async fn state(&self, handle: &TargetHandle) -> Result<CheckState, RunError>;

    /// Force the checked state: native prototype setter, explicit
    /// `aria-checked`, then plain `input`/`change` events.
    async fn force_checked(&self, handle: &TargetHandle, value: bool) -> Result<(), RunError>;
}
