use std::time::Duration;

/// How the browser side of a run is set up.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub headless: bool,
    pub viewport: Option<(u32, u32)>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self { headless: true, viewport: Some((1280, 720)) }
    }
}

#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Upper bound on waiting for the first label to appear.
    pub panel_wait: Duration,
    /// Upper bound on the page-stabilization loop.
    pub page_stable: Duration,
    /// Poll interval for both waits.
    pub check_interval: Duration,
    /// Grace period after the page first reads as stable.
    pub settle_delay: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            panel_wait: Duration::from_millis(15000),
            page_stable: Duration::from_millis(30000),
            check_interval: Duration::from_millis(300),
            settle_delay: Duration::from_millis(1000),
        }
    }
}

impl TimeoutConfig {
    pub fn with_panel_wait(mut self, ms: u64) -> Self {
        self.panel_wait = Duration::from_millis(ms);
        self
    }

    /// For slow controllers that re-render the panel a few times on load.
    pub fn patient() -> Self {
        Self {
            panel_wait: Duration::from_millis(30000),
            page_stable: Duration::from_millis(60000),
            check_interval: Duration::from_millis(500),
            settle_delay: Duration::from_millis(2000),
        }
    }
}
