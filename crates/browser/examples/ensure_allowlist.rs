//! Drive the default country allow-list against a live settings panel.
//!
//! Open the Region Blocking settings in the controller, pick ALLOW for
//! both directions, click Edit so the country rows are rendered, then run
//! this with the panel URL.

use checkset_browser::{BrowserSession, LaunchConfig, TimeoutConfig};
use checkset_core::{print_summary, run_targets, TargetSet};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080/settings/security".to_string());

    let session = BrowserSession::launch(&LaunchConfig {
        headless: false,
        ..Default::default()
    })
    .await?;

    println!("Preparing {url}...");
    let page = session.open(&url, TimeoutConfig::patient()).await?;

    let targets = TargetSet::default_allowlist();
    let summary = run_targets(&page, &targets, true).await?;
    print_summary(&summary);

    Ok(())
}
