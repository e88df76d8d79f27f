//! Aggregate entry point over all playground scenarios
//!
//! Holds one instance of each scenario helper and forwards every public
//! operation to exactly one of them, so calling code needs a single import.

use anyhow::Result;
use std::sync::Arc;

use crate::driver::PageDriver;
use crate::scenario::{FormData, InputFormScenario, SimpleFormScenario, SliderScenario};
use crate::utils::config::PlaygroundConfig;

/// Single flat interaction surface for calling tests
pub struct PlaygroundHelper {
    simple_form: SimpleFormScenario,
    slider: SliderScenario,
    input_form: InputFormScenario,
}

impl PlaygroundHelper {
    pub fn new(driver: Arc<dyn PageDriver>, config: PlaygroundConfig) -> Self {
        Self {
            simple_form: SimpleFormScenario::new(driver.clone(), config.clone()),
            slider: SliderScenario::new(driver.clone(), config.clone()),
            input_form: InputFormScenario::new(driver, config),
        }
    }

    // Simple Form Demo

    pub async fn goto_simple_form_demo(&self) -> Result<()> {
        self.simple_form.goto_page().await
    }

    pub async fn echo_message(&self, message: &str) -> Result<Option<String>> {
        self.simple_form.echo_message(message).await
    }

    // Drag & Drop Sliders

    pub async fn goto_drag_drop_sliders(&self) -> Result<()> {
        self.slider.goto_page().await
    }

    pub async fn set_slider_value(&self, index: usize, target: i64) -> Result<()> {
        self.slider.set_slider_value(index, target).await
    }

    pub async fn read_slider_value(&self, index: usize) -> Option<String> {
        self.slider.read_slider_value(index).await
    }

    // Input Form Submit

    pub async fn goto_input_form_submit(&self) -> Result<()> {
        self.input_form.goto_page().await
    }

    pub async fn fill_and_submit(&self, data: &FormData) -> Result<()> {
        self.input_form.fill_and_submit(data).await
    }

    pub async fn submit_empty(&self) -> Result<()> {
        self.input_form.submit_empty().await
    }

    pub async fn read_success_message(&self) -> Option<String> {
        self.input_form.read_success_message().await
    }
}
