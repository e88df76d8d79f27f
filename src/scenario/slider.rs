//! Drag & Drop Sliders scenario
//!
//! Slider values are set by filling the range control rather than simulating
//! a pointer drag; filling is deterministic where drag positioning is not.

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use crate::driver::PageDriver;
use crate::scenario::strategies::{
    default_chain, resolve_value, ValueStrategy, RANGE_INPUT_SELECTOR,
};
use crate::scenario::{goto_scenario_page, ScenarioError};
use crate::utils::config::PlaygroundConfig;

/// Allowed deviation between the requested and observed value. Controls may
/// snap to a step boundary, so the post-set check is tolerant.
const VALUE_TOLERANCE: i64 = 2;

/// Helper for the Drag & Drop Sliders page
pub struct SliderScenario {
    driver: Arc<dyn PageDriver>,
    config: PlaygroundConfig,
    strategies: Vec<Box<dyn ValueStrategy>>,
}

impl SliderScenario {
    pub fn new(driver: Arc<dyn PageDriver>, config: PlaygroundConfig) -> Self {
        Self {
            driver,
            config,
            strategies: default_chain(),
        }
    }

    /// Replace the value-resolution chain
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ValueStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Navigate to the sliders page and let the widgets finish initializing
    pub async fn goto_page(&self) -> Result<()> {
        goto_scenario_page(
            self.driver.as_ref(),
            &self.config,
            "Drag & Drop Sliders",
            &self.config.pages.drag_drop_sliders,
        )
        .await?;
        // Widgets attach their listeners after the load event fires
        self.driver
            .delay(self.config.timeouts.page_load_settle_ms)
            .await;
        Ok(())
    }

    /// Set the slider at `index` to `target` and verify the landed value
    /// within tolerance
    ///
    /// A value mismatch beyond tolerance is logged, not raised: the control
    /// may legitimately snap to a step boundary.
    pub async fn set_slider_value(&self, index: usize, target: i64) -> Result<()> {
        let timeouts = &self.config.timeouts;

        if !self
            .driver
            .wait_for_selector(RANGE_INPUT_SELECTOR, timeouts.widget_wait_ms)
            .await?
        {
            return Err(ScenarioError::WidgetsMissing {
                selector: RANGE_INPUT_SELECTOR.to_string(),
                timeout_ms: timeouts.widget_wait_ms,
            }
            .into());
        }

        let count = self.driver.count(RANGE_INPUT_SELECTOR).await?;
        if index >= count {
            return Err(ScenarioError::SliderIndexOutOfRange { index, count }.into());
        }

        let current = self
            .driver
            .input_value(RANGE_INPUT_SELECTOR, index)
            .await
            .unwrap_or_default();
        debug!("Slider {} currently at '{}'", index, current);

        self.driver
            .fill(RANGE_INPUT_SELECTOR, index, &target.to_string())
            .await?;
        self.driver.delay(timeouts.value_settle_ms).await;

        let observed = self.driver.input_value(RANGE_INPUT_SELECTOR, index).await?;
        match observed.trim().parse::<i64>() {
            Ok(value) if (value - target).abs() > VALUE_TOLERANCE => {
                warn!(
                    "Slider {} landed on {} instead of {} (tolerance {})",
                    index, value, target, VALUE_TOLERANCE
                );
            }
            Ok(_) => {}
            Err(_) => {
                warn!("Slider {} value '{}' is not numeric", index, observed);
            }
        }
        Ok(())
    }

    /// Current value of the slider at `index`, through the resolution chain
    pub async fn read_slider_value(&self, index: usize) -> Option<String> {
        resolve_value(self.driver.as_ref(), index, &self.strategies).await
    }
}
