use async_trait::async_trait;
use chromiumoxide::page::Page;
use serde_json::{json, Value};
use tracing::debug;

use checkset_core::{
    CheckState, ClickSurface, FireResult, PageDriver, RootScope, RunError, TargetHandle,
    TargetSnapshot, TargetSet,
};

use super::wait::WaitStrategy;
use crate::shared::{js, to_run_error, TimeoutConfig};

/// A prepared page: stabilized, helpers installed, panel labels present.
/// Implements [`PageDriver`] by evaluating the injected primitives and
/// deserializing their JSON results.
pub struct ChromiumPage {
    page: Page,
}

impl ChromiumPage {
    pub(crate) async fn prepare(page: Page, timeouts: TimeoutConfig) -> Result<Self, RunError> {
        let wait = WaitStrategy::new(timeouts);
        wait.wait_for_stable(&page).await?;

        let this = Self { page };
        this.install().await?;
        wait.wait_for_panel(&this.page).await?;
        Ok(this)
    }

    async fn install(&self) -> Result<(), RunError> {
        let v = self
            .eval(js::build_js_call(js::page::INSTALL_HELPERS, &[]), "Install")
            .await?;
        let fresh = v.get("installed").and_then(Value::as_bool).unwrap_or(false);
        debug!(fresh, "page helpers present");
        Ok(())
    }

    async fn eval(&self, script: String, action: &str) -> Result<Value, RunError> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| to_run_error(e, action))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl PageDriver for ChromiumPage {
    async fn roots(&self) -> Result<Vec<RootScope>, RunError> {
        let v = self
            .eval(js::build_js_call(js::page::LIST_ROOTS, &[]), "ListRoots")
            .await?;
        serde_json::from_value(v)
            .map_err(|e| RunError::script_error(format!("ListRoots returned junk: {}", e)))
    }

    async fn collect(
        &self,
        root: &RootScope,
        targets: &TargetSet,
    ) -> Result<Vec<TargetSnapshot>, RunError> {
        let v = self
            .eval(
                js::build_js_call(
                    js::page::COLLECT_TARGETS,
                    &[json!(root.index), json!(targets.names())],
                ),
                "Collect",
            )
            .await?;
        let snapshots: Vec<TargetSnapshot> = serde_json::from_value(v)
            .map_err(|e| RunError::script_error(format!("Collect returned junk: {}", e)))?;
        debug!(scope = %root.scope, found = snapshots.len(), "collected targets");
        Ok(snapshots)
    }

    async fn fire_sequence(
        &self,
        handle: &TargetHandle,
        surface: ClickSurface,
    ) -> Result<FireResult, RunError> {
        let surface_arg = match surface {
            ClickSurface::Input => "input",
            ClickSurface::Label => "label",
        };
        let v = self
            .eval(
                js::build_js_call(
                    js::checkbox::FIRE_SEQUENCE,
                    &[json!(handle.root_index), json!(handle.slot), json!(surface_arg)],
                ),
                "FireSequence",
            )
            .await?;

        match v.get("outcome").and_then(Value::as_str) {
            Some("fired") => Ok(FireResult::Fired),
            Some("no-surface") => Ok(FireResult::NoSurface),
            Some("missing") => Err(RunError::element_not_found(format!(
                "slot {} in root {}",
                handle.slot, handle.root_index
            ))),
            other => Err(RunError::script_error(format!(
                "FireSequence returned junk: {:?}",
                other
            ))),
        }
    }

    async fn state(&self, handle: &TargetHandle) -> Result<CheckState, RunError> {
        let v = self
            .eval(
                js::build_js_call(
                    js::checkbox::READ_STATE,
                    &[json!(handle.root_index), json!(handle.slot)],
                ),
                "ReadState",
            )
            .await?;

        if v.is_null() {
            return Err(RunError::element_not_found(format!(
                "slot {} in root {}",
                handle.slot, handle.root_index
            )));
        }
        serde_json::from_value(v)
            .map_err(|e| RunError::script_error(format!("ReadState returned junk: {}", e)))
    }

    async fn force_checked(&self, handle: &TargetHandle, value: bool) -> Result<(), RunError> {
        let v = self
            .eval(
                js::build_js_call(
                    js::checkbox::FORCE_CHECKED,
                    &[json!(handle.root_index), json!(handle.slot), json!(value)],
                ),
                "ForceChecked",
            )
            .await?;

        if v.get("forced").and_then(Value::as_bool) == Some(true) {
            Ok(())
        } else {
            Err(RunError::element_not_found(format!(
                "slot {} in root {}",
                handle.slot, handle.root_index
            )))
        }
    }
}
