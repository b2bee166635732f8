use chromiumoxide::page::Page;
use checkset_core::RunError;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::shared::{js, to_run_error, TimeoutConfig};

/// Loops that hold the run back until the page is actually usable.
pub struct WaitStrategy {
    config: TimeoutConfig,
}

impl WaitStrategy {
    pub fn new(config: TimeoutConfig) -> Self {
        Self { config }
    }

    /// Wait for `readyState == "complete"` with no in-flight resource
    /// requests over several consecutive checks. Execution-context loss
    /// (mid-navigation) resets the count instead of failing.
    pub async fn wait_for_stable(&self, page: &Page) -> Result<(), RunError> {
        let timeout = self.config.page_stable;
        let start = Instant::now();
        let mut stable_checks = 0;
        let required_stable_checks = 5;

        debug!("waiting for page to stabilize");
        sleep(Duration::from_millis(500)).await;

        loop {
            let js = js::build_js_call(js::wait::CHECK_LOADING, &[]);

            let result = match page.evaluate(js).await {
                Ok(r) => r,
                Err(e) => {
                    let err_str = e.to_string();
                    if err_str.contains("Cannot find context")
                        || err_str.contains("Execution context was destroyed")
                    {
                        debug!("page context changed (navigating), waiting");
                        stable_checks = 0;
                        sleep(Duration::from_millis(1000)).await;
                        continue;
                    }
                    return Err(to_run_error(e, "WaitForStable"));
                }
            };

            if let Some(state) = result.value() {
                let ready = state.get("readyState").and_then(|v| v.as_str()) == Some("complete");
                let active = state.get("activeRequests").and_then(|v| v.as_u64()).unwrap_or(0);

                if ready && active == 0 {
                    stable_checks += 1;
                    if stable_checks >= required_stable_checks {
                        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "page stabilized");
                        sleep(self.config.settle_delay).await;
                        return Ok(());
                    }
                } else {
                    if stable_checks > 0 {
                        debug!(ready, active, "page activity detected, resetting");
                    }
                    stable_checks = 0;
                }
            }

            if start.elapsed() > timeout {
                warn!("page stabilization timeout, continuing anyway");
                return Ok(());
            }

            sleep(self.config.check_interval).await;
        }
    }

    /// Wait until some root (top document or reachable iframe) exposes a
    /// `<label>`. Requires the page helpers to be installed.
    pub async fn wait_for_panel(&self, page: &Page) -> Result<(), RunError> {
        let timeout = self.config.panel_wait;
        let start = Instant::now();

        loop {
            let js = js::build_js_call(js::wait::PANEL_READY, &[]);
            let result = page
                .evaluate(js)
                .await
                .map_err(|e| to_run_error(e, "WaitForPanel"))?;

            if result.value().and_then(|v| v.as_bool()) == Some(true) {
                debug!(elapsed_ms = start.elapsed().as_millis() as u64, "panel labels present");
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(RunError::timeout_error(format!(
                    "No labels appeared within {}ms",
                    timeout.as_millis()
                )));
            }

            sleep(self.config.check_interval).await;
        }
    }
}
