use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig, HeadlessMode};
use futures::StreamExt;
use tracing::info;

use checkset_core::RunError;

use super::page::ChromiumPage;
use crate::shared::{LaunchConfig, TimeoutConfig};

/// A connected browser, either launched by us or attached to.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    /// Launch a fresh chromium with a unique temp profile per instance to
    /// avoid SingletonLock conflicts.
    pub async fn launch(config: &LaunchConfig) -> Result<Self, RunError> {
        let temp_dir = std::env::temp_dir().join(format!("checkset-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&temp_dir)
            .map_err(|e| RunError::browser_error(format!("Failed to create temp dir: {}", e)))?;

        let mut builder = ChromeConfig::builder()
            .headless_mode(if config.headless { HeadlessMode::True } else { HeadlessMode::False })
            .user_data_dir(temp_dir);

        if let Some((w, h)) = config.viewport {
            builder = builder.window_size(w, h);
        }

        let chrome_cfg = builder
            .build()
            .map_err(|e| RunError::browser_error(format!("Config failed: {}", e)))?;

        let (browser, mut handler) = Browser::launch(chrome_cfg)
            .await
            .map_err(|e| RunError::browser_error(format!("Launch failed: {}", e)))?;

        tokio::spawn(async move { while handler.next().await.is_some() {} });
        info!(headless = config.headless, "browser launched");
        Ok(Self { browser })
    }

    /// Attach to an already-running browser over its DevTools websocket.
    /// This is the intended path for panels behind a login: start the
    /// browser with `--remote-debugging-port`, sign in, then attach.
    pub async fn attach(ws_url: &str) -> Result<Self, RunError> {
        let (browser, mut handler) = Browser::connect(ws_url)
            .await
            .map_err(|e| RunError::browser_error(format!("Attach failed: {}", e)))?;

        tokio::spawn(async move { while handler.next().await.is_some() {} });
        info!(ws_url, "attached to running browser");
        Ok(Self { browser })
    }

    /// Open a new page, navigate to the panel, and prepare it for a run.
    pub async fn open(&self, url: &str, timeouts: TimeoutConfig) -> Result<ChromiumPage, RunError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RunError::browser_error(format!("New page failed: {}", e)))?;

        page.goto(url)
            .await
            .map_err(|e| RunError::navigation_error(format!("Navigation failed: {}", e)))?;

        ChromiumPage::prepare(page, timeouts).await
    }

    /// Adopt the first open tab of an attached browser — the operator has
    /// already navigated to the settings panel there.
    pub async fn current_page(&self, timeouts: TimeoutConfig) -> Result<ChromiumPage, RunError> {
        let pages = self
            .browser
            .pages()
            .await
            .map_err(|e| RunError::browser_error(format!("Listing pages failed: {}", e)))?;

        let page = pages
            .into_iter()
            .next()
            .ok_or_else(|| RunError::browser_error("No open pages to adopt"))?;

        ChromiumPage::prepare(page, timeouts).await
    }
}
