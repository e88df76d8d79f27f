//! Web driver implementation using Playwright
//!
//! Backs the `PageDriver` boundary with a real browser session. Where the
//! playwright 0.0.x crate has no binding for an operation, the driver falls
//! back to evaluating JavaScript in the page.

use anyhow::{Context, Result};
use async_trait::async_trait;
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use playwright::Playwright;
use regex::Regex;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::driver::traits::PageDriver;

/// Web browser type
#[derive(Debug, Clone, Copy, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    /// Parse a browser name, defaulting to Chromium for unknown values
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "firefox" => Self::Firefox,
            "webkit" | "safari" => Self::Webkit,
            _ => Self::Chromium,
        }
    }
}

/// Web driver configuration
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub browser: BrowserKind,
    pub headless: bool,
    /// Optional base prepended to relative navigation targets
    pub base_url: Option<String>,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        let headless = std::env::var("PLAYGROUND_HEADLESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Self {
            browser: BrowserKind::Chromium,
            headless,
            base_url: None,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// Page driver backed by a Playwright browser session
pub struct WebDriver {
    #[allow(dead_code)]
    playwright: Arc<Playwright>,
    #[allow(dead_code)]
    browser: Arc<Browser>,
    #[allow(dead_code)]
    context: Arc<BrowserContext>,
    page: Arc<Mutex<Page>>,
    config: WebDriverConfig,
}

impl WebDriver {
    /// Launch a browser and open a fresh page
    pub async fn new(config: WebDriverConfig) -> Result<Self> {
        let playwright = Playwright::initialize()
            .await
            .context("Failed to initialize Playwright")?;

        let browser = match config.browser {
            BrowserKind::Chromium => launch_chromium(&playwright.chromium(), &config).await?,
            BrowserKind::Firefox => {
                playwright
                    .firefox()
                    .launcher()
                    .headless(config.headless)
                    .launch()
                    .await?
            }
            BrowserKind::Webkit => {
                playwright
                    .webkit()
                    .launcher()
                    .headless(config.headless)
                    .launch()
                    .await?
            }
        };

        let context = browser.context_builder().build().await?;
        let page = context.new_page().await?;

        page.set_viewport_size(Viewport {
            width: config.viewport_width as i32,
            height: config.viewport_height as i32,
        })
        .await?;

        Ok(Self {
            playwright: Arc::new(playwright),
            browser: Arc::new(browser),
            context: Arc::new(context),
            page: Arc::new(Mutex::new(page)),
            config,
        })
    }
}

async fn launch_chromium(
    chromium: &playwright::api::BrowserType,
    config: &WebDriverConfig,
) -> Result<Browser> {
    let mut launcher = chromium.launcher();
    launcher = launcher.headless(config.headless);

    let env_path = std::env::var("PLAYWRIGHT_CHROMIUM_EXECUTABLE_PATH")
        .ok()
        .map(std::path::PathBuf::from);

    if let Some(ref path) = env_path {
        log::info!("Using browser executable from env: {}", path.display());
        launcher = launcher.executable(path);
    }

    Ok(launcher.launch().await?)
}

/// Address the nth match of a selector through the engine's nth filter
fn nth_selector(selector: &str, nth: usize) -> String {
    if nth == 0 {
        selector.to_string()
    } else {
        format!("{} >> nth={}", selector, nth)
    }
}

/// Join a relative target onto an optional base URL. Absolute targets pass
/// through unchanged.
fn join_base_url(base: Option<&str>, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if let Some(base) = base {
        format!("{}{}", base.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}

#[async_trait]
impl PageDriver for WebDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        let page = self.page.lock().await;
        let full_url = join_base_url(self.config.base_url.as_deref(), url);
        page.goto_builder(&full_url)
            .goto()
            .await
            .context("Failed to navigate to URL")?;
        Ok(())
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let page = self.page.lock().await;
        Ok(page.query_selector_all(selector).await?.len())
    }

    async fn fill(&self, selector: &str, nth: usize, value: &str) -> Result<()> {
        let page = self.page.lock().await;
        let elements = page.query_selector_all(selector).await?;
        match elements.get(nth) {
            Some(element) => {
                element.fill_builder(value).fill().await?;
                Ok(())
            }
            None => anyhow::bail!("Element not found: {} at index {}", selector, nth),
        }
    }

    async fn click(&self, selector: &str, nth: usize) -> Result<()> {
        let page = self.page.lock().await;
        let elements = page.query_selector_all(selector).await?;
        match elements.get(nth) {
            Some(element) => {
                element.click_builder().click().await?;
                Ok(())
            }
            None => anyhow::bail!("Element not found: {} at index {}", selector, nth),
        }
    }

    async fn select_by_label(&self, selector: &str, label: &str) -> Result<bool> {
        let page = self.page.lock().await;
        // playwright 0.0.x has no select-option binding, so drive the
        // <select> through the DOM directly
        let js = format!(
            r#"() => {{
                const select = document.querySelector({selector});
                if (!select) return false;
                for (const option of select.options) {{
                    if (option.label === {label} || option.textContent.trim() === {label}) {{
                        select.value = option.value;
                        select.dispatchEvent(new Event('change', {{ bubbles: true }}));
                        return true;
                    }}
                }}
                return false;
            }}"#,
            selector = serde_json::to_string(selector)?,
            label = serde_json::to_string(label)?,
        );
        let selected: bool = page.evaluate(&js, ()).await?;
        Ok(selected)
    }

    async fn get_attribute(
        &self,
        selector: &str,
        nth: usize,
        name: &str,
    ) -> Result<Option<String>> {
        let page = self.page.lock().await;
        let target = nth_selector(selector, nth);
        let js = format!("el => el.getAttribute({})", serde_json::to_string(name)?);
        let value: std::result::Result<Option<String>, _> =
            page.evaluate_on_selector(&target, &js, None::<String>).await;
        Ok(value.unwrap_or(None))
    }

    async fn text_content(&self, selector: &str, nth: usize) -> Result<Option<String>> {
        let page = self.page.lock().await;
        let target = nth_selector(selector, nth);
        let text: std::result::Result<Option<String>, _> = page
            .evaluate_on_selector(&target, "el => el.textContent", None::<String>)
            .await;
        Ok(text.unwrap_or(None))
    }

    async fn input_value(&self, selector: &str, nth: usize) -> Result<String> {
        let page = self.page.lock().await;
        // No input-value binding in 0.0.x; read the live property instead
        let target = nth_selector(selector, nth);
        let value: std::result::Result<String, _> = page
            .evaluate_on_selector(&target, "el => String(el.value || '')", None::<String>)
            .await;
        Ok(value.unwrap_or_default())
    }

    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<bool> {
        let page = self.page.lock().await;
        let result = page
            .wait_for_selector_builder(selector)
            .timeout(timeout_ms as f64)
            .wait_for_selector()
            .await;
        Ok(result.is_ok())
    }

    async fn wait_for_url(&self, pattern: &str, timeout_ms: u64) -> Result<bool> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid URL pattern: {}", pattern))?;
        let start = Instant::now();

        while start.elapsed().as_millis() < timeout_ms as u128 {
            let current: String = {
                let page = self.page.lock().await;
                page.evaluate("() => window.location.href", ()).await?
            };
            if regex.is_match(&current) {
                return Ok(true);
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }

        Ok(false)
    }

    async fn delay(&self, ms: u64) {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
