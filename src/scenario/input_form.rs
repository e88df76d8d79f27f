//! Input Form Submit scenario
//!
//! Every field is filled through the best-effort primitives with a primary
//! semantic selector and a name-attribute fallback, so a missing optional
//! field never aborts the submission.

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::driver::PageDriver;
use crate::interact::{click_safely, fill_safely, wait_safely};
use crate::scenario::goto_scenario_page;
use crate::utils::config::PlaygroundConfig;

/// Field values for the input form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub website: String,
    pub country: String,
    pub city: String,
    pub address1: String,
    pub address2: String,
    pub state: String,
    pub zip: String,
}

/// Dropdown candidates for the country selector
const COUNTRY_SELECTORS: [&str; 3] = ["select.form-control", "select[name=\"country\"]", "select"];

/// Submit control candidates. `#contbtn` is a decoy "continue" button on the
/// same page and is excluded explicitly.
const SUBMIT_SELECTORS: [&str; 4] = [
    "button[type=\"submit\"]:not(#contbtn)",
    "form button[type=\"submit\"]",
    "button.btn-primary",
    "input[type=\"submit\"]",
];

/// Ranked success indicators, class-based first
const SUCCESS_CLASS_SELECTORS: [&str; 2] = [".success-msg", ".alert-success"];
const SUCCESS_TEXT_SELECTOR: &str = "text=/Thanks|Success|successfully/i";

/// Helper for the Input Form Submit page
pub struct InputFormScenario {
    driver: Arc<dyn PageDriver>,
    config: PlaygroundConfig,
}

impl InputFormScenario {
    pub fn new(driver: Arc<dyn PageDriver>, config: PlaygroundConfig) -> Self {
        Self { driver, config }
    }

    /// Navigate to the Input Form Submit page
    pub async fn goto_page(&self) -> Result<()> {
        goto_scenario_page(
            self.driver.as_ref(),
            &self.config,
            "Input Form Submit",
            &self.config.pages.input_form_submit,
        )
        .await?;
        self.driver
            .delay(self.config.timeouts.page_load_settle_ms)
            .await;
        Ok(())
    }

    /// Fill every known field and submit the form
    pub async fn fill_and_submit(&self, data: &FormData) -> Result<()> {
        let driver = self.driver.as_ref();

        fill_safely(driver, &["input#name", "input[name=\"name\"]"], &data.name).await;
        fill_safely(
            driver,
            &["input#inputEmail4", "input[name=\"email\"]"],
            &data.email,
        )
        .await;
        fill_safely(
            driver,
            &["input#inputPassword4", "input[name=\"password\"]"],
            &data.password,
        )
        .await;
        fill_safely(
            driver,
            &["input#company", "input[name=\"company\"]"],
            &data.company,
        )
        .await;
        fill_safely(
            driver,
            &["input#websitename", "input[name=\"website\"]"],
            &data.website,
        )
        .await;

        self.select_country(&data.country).await;

        fill_safely(
            driver,
            &["input#inputCity", "input[name=\"city\"]"],
            &data.city,
        )
        .await;
        fill_safely(
            driver,
            &["input#inputAddress1", "input[name=\"address_line1\"]"],
            &data.address1,
        )
        .await;
        fill_safely(
            driver,
            &["input#inputAddress2", "input[name=\"address_line2\"]"],
            &data.address2,
        )
        .await;
        fill_safely(
            driver,
            &["input#inputState", "input[name=\"state\"]"],
            &data.state,
        )
        .await;
        fill_safely(driver, &["input#inputZip", "input[name=\"zip\"]"], &data.zip).await;

        self.submit().await;
        Ok(())
    }

    /// Submit without filling anything
    pub async fn submit_empty(&self) -> Result<()> {
        self.submit().await;
        Ok(())
    }

    /// First success indicator found on the page, if any
    pub async fn read_success_message(&self) -> Option<String> {
        let driver = self.driver.as_ref();
        let timeout = self.config.timeouts.message_check_ms;

        for selector in SUCCESS_CLASS_SELECTORS {
            if wait_safely(driver, selector, timeout).await {
                if let Ok(Some(text)) = driver.text_content(selector, 0).await {
                    return Some(text);
                }
            }
        }

        if let Ok(count) = driver.count(SUCCESS_TEXT_SELECTOR).await {
            if count > 0 {
                if let Ok(Some(text)) = driver.text_content(SUCCESS_TEXT_SELECTOR, 0).await {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Country dropdown: first present candidate wins; exhaustion is
    /// non-fatal
    async fn select_country(&self, country: &str) {
        for selector in COUNTRY_SELECTORS {
            match self.driver.select_by_label(selector, country).await {
                Ok(true) => return,
                Ok(false) | Err(_) => {} // next candidate
            }
        }
        warn!("Could not select the country");
    }

    async fn submit(&self) {
        click_safely(self.driver.as_ref(), &SUBMIT_SELECTORS).await;
    }
}
