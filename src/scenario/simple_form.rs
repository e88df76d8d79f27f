//! Simple Form Demo scenario

use anyhow::Result;
use std::sync::Arc;

use crate::driver::PageDriver;
use crate::scenario::goto_scenario_page;
use crate::utils::config::PlaygroundConfig;

/// Helper for the Simple Form Demo page
pub struct SimpleFormScenario {
    driver: Arc<dyn PageDriver>,
    config: PlaygroundConfig,
}

impl SimpleFormScenario {
    pub fn new(driver: Arc<dyn PageDriver>, config: PlaygroundConfig) -> Self {
        Self { driver, config }
    }

    /// Navigate to the Simple Form Demo page
    pub async fn goto_page(&self) -> Result<()> {
        goto_scenario_page(
            self.driver.as_ref(),
            &self.config,
            "Simple Form Demo",
            &self.config.pages.simple_form_demo,
        )
        .await
    }

    /// Type a message into the form and return the echoed output
    ///
    /// The message input is required for the scenario to make sense, so its
    /// absence is an error. A missing echo element just yields None.
    pub async fn echo_message(&self, message: &str) -> Result<Option<String>> {
        let timeout = self.config.timeouts.element_wait_ms;

        if !self.driver.wait_for_selector("#user-message", timeout).await? {
            anyhow::bail!("Message input #user-message did not appear");
        }
        self.driver.fill("#user-message", 0, message).await?;
        self.driver.click("#showInput", 0).await?;

        if !self.driver.wait_for_selector("#message", timeout).await? {
            return Ok(None);
        }
        self.driver.text_content("#message", 0).await
    }
}
