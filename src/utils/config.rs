//! Run configuration for the playground scenarios
//!
//! All timing and URL knobs live here so scenario helpers carry no hidden
//! coupling to process-wide state. Values can be overridden from a YAML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sub-page path segments of the playground. Each segment also serves as the
/// URL confirmation pattern after following the corresponding link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePaths {
    pub playground: String,
    pub simple_form_demo: String,
    pub drag_drop_sliders: String,
    pub input_form_submit: String,
}

impl Default for PagePaths {
    fn default() -> Self {
        Self {
            playground: "/selenium-playground".to_string(),
            simple_form_demo: "simple-form-demo".to_string(),
            drag_drop_sliders: "drag-drop-range-sliders-demo".to_string(),
            input_form_submit: "input-form-demo".to_string(),
        }
    }
}

/// Named timeout durations, all in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeouts {
    /// Settle delay after a scenario page loads. Slider widgets attach their
    /// event listeners after the load event fires.
    pub page_load_settle_ms: u64,

    /// How long to wait for a success indicator to appear
    pub message_check_ms: u64,

    /// Hard wait for at least one range control on the sliders page
    pub widget_wait_ms: u64,

    /// Settle delay after setting a slider value, before re-reading it
    pub value_settle_ms: u64,

    /// Wait for a scenario link or form element to appear
    pub element_wait_ms: u64,

    /// URL confirmation wait after following a scenario link
    pub url_confirm_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            page_load_settle_ms: 2000,
            message_check_ms: 5000,
            widget_wait_ms: 30000,
            value_settle_ms: 200,
            element_wait_ms: 15000,
            url_confirm_ms: 10000,
        }
    }
}

/// Configuration consumed by the scenario helpers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaygroundConfig {
    pub base_url: String,
    pub pages: PagePaths,
    pub timeouts: Timeouts,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.lambdatest.com".to_string(),
            pages: PagePaths::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Load configuration from a YAML file, falling back to defaults for
    /// any field the file omits
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content).context("Failed to parse config YAML")
    }

    /// Absolute URL of the playground index page
    pub fn playground_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.pages.playground
        )
    }
}
