//! Per-page scenario helpers
//!
//! Each helper encodes the selectors and strategies that apply to one
//! playground page, built on top of the interaction primitives. A helper is
//! created once per page session and reused for its lifetime; all page state
//! lives in the driver.

pub mod input_form;
pub mod simple_form;
pub mod slider;
pub mod strategies;

pub use input_form::{FormData, InputFormScenario};
pub use simple_form::SimpleFormScenario;
pub use slider::SliderScenario;

use anyhow::Result;
use thiserror::Error;

use crate::driver::PageDriver;
use crate::utils::config::PlaygroundConfig;

/// Hard-failure tier: conditions that invalidate a scenario. Proceeding past
/// one of these would produce a misleading pass or a meaningless failure
/// elsewhere, so they raise instead of degrading.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("No elements matching '{selector}' appeared within {timeout_ms}ms")]
    WidgetsMissing { selector: String, timeout_ms: u64 },

    #[error("Slider index {index} is out of range. Found {count} sliders.")]
    SliderIndexOutOfRange { index: usize, count: usize },
}

/// Navigate from the playground index to a scenario page by following its
/// link, then confirm the URL changed
pub(crate) async fn goto_scenario_page(
    driver: &dyn PageDriver,
    config: &PlaygroundConfig,
    link_text: &str,
    url_pattern: &str,
) -> Result<()> {
    driver.goto(&config.playground_url()).await?;

    let link = format!("a:text(\"{}\")", link_text);
    if !driver
        .wait_for_selector(&link, config.timeouts.element_wait_ms)
        .await?
    {
        anyhow::bail!("Link '{}' not found on playground page", link_text);
    }
    driver.click(&link, 0).await?;

    if !driver
        .wait_for_url(url_pattern, config.timeouts.url_confirm_ms)
        .await?
    {
        anyhow::bail!("Navigation to '{}' was not confirmed", url_pattern);
    }
    Ok(())
}
