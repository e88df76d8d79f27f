//! In-memory page driver for unit tests
//!
//! Implements the `PageDriver` boundary against a simple page model so the
//! primitives, strategies and scenarios can be tested without a browser.
//! Every mutating call is recorded for later assertions.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::driver::traits::PageDriver;

/// One recorded fill operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillCall {
    pub selector: String,
    pub nth: usize,
    pub value: String,
}

#[derive(Default)]
struct MockState {
    element_counts: HashMap<String, usize>,
    texts: HashMap<(String, usize), String>,
    attributes: HashMap<(String, usize, String), String>,
    value_overrides: HashMap<String, String>,
    failing_selectors: HashSet<String>,
    failing_fills: HashSet<String>,

    gotos: Vec<String>,
    fills: Vec<FillCall>,
    clicks: Vec<(String, usize)>,
    selects: Vec<(String, String)>,
    queried: Vec<String>,
}

/// Mock `PageDriver` backed by an in-memory page model
#[derive(Default)]
pub struct MockPageDriver {
    state: Mutex<MockState>,
}

impl MockPageDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `count` matches of `selector` exist on the mock page
    pub fn add_element(&self, selector: &str, count: usize) {
        self.state
            .lock()
            .unwrap()
            .element_counts
            .insert(selector.to_string(), count);
    }

    pub fn set_text(&self, selector: &str, nth: usize, text: &str) {
        self.state
            .lock()
            .unwrap()
            .texts
            .insert((selector.to_string(), nth), text.to_string());
    }

    pub fn set_attribute(&self, selector: &str, nth: usize, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .attributes
            .insert((selector.to_string(), nth, name.to_string()), value.to_string());
    }

    /// Force `input_value` to report this value regardless of fills, e.g. to
    /// simulate a control snapping to a step boundary
    pub fn override_value(&self, selector: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .value_overrides
            .insert(selector.to_string(), value.to_string());
    }

    /// Make selector resolution error out for `selector`
    pub fn fail_selector(&self, selector: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_selectors
            .insert(selector.to_string());
    }

    /// Make fill operations error out for `selector`
    pub fn fail_fill(&self, selector: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_fills
            .insert(selector.to_string());
    }

    pub fn gotos(&self) -> Vec<String> {
        self.state.lock().unwrap().gotos.clone()
    }

    pub fn fills(&self) -> Vec<FillCall> {
        self.state.lock().unwrap().fills.clone()
    }

    pub fn clicks(&self) -> Vec<(String, usize)> {
        self.state.lock().unwrap().clicks.clone()
    }

    pub fn selects(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().selects.clone()
    }

    /// Selectors passed to `count`, in call order
    pub fn queried_selectors(&self) -> Vec<String> {
        self.state.lock().unwrap().queried.clone()
    }

    /// True when no mutating operation has reached the page
    pub fn untouched(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.fills.is_empty() && state.clicks.is_empty() && state.selects.is_empty()
    }
}

#[async_trait]
impl PageDriver for MockPageDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        self.state.lock().unwrap().gotos.push(url.to_string());
        Ok(())
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let mut state = self.state.lock().unwrap();
        state.queried.push(selector.to_string());
        if state.failing_selectors.contains(selector) {
            anyhow::bail!("selector engine error: {}", selector);
        }
        Ok(state.element_counts.get(selector).copied().unwrap_or(0))
    }

    async fn fill(&self, selector: &str, nth: usize, value: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_fills.contains(selector) {
            anyhow::bail!("fill failed: {}", selector);
        }
        state.fills.push(FillCall {
            selector: selector.to_string(),
            nth,
            value: value.to_string(),
        });
        // Keep the value attribute in sync, like a widget mirroring its
        // state into the DOM for display code to read
        state.attributes.insert(
            (selector.to_string(), nth, "value".to_string()),
            value.to_string(),
        );
        Ok(())
    }

    async fn click(&self, selector: &str, nth: usize) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .clicks
            .push((selector.to_string(), nth));
        Ok(())
    }

    async fn select_by_label(&self, selector: &str, label: &str) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if state.element_counts.get(selector).copied().unwrap_or(0) == 0 {
            return Ok(false);
        }
        state
            .selects
            .push((selector.to_string(), label.to_string()));
        Ok(true)
    }

    async fn get_attribute(
        &self,
        selector: &str,
        nth: usize,
        name: &str,
    ) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .attributes
            .get(&(selector.to_string(), nth, name.to_string()))
            .cloned())
    }

    async fn text_content(&self, selector: &str, nth: usize) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.texts.get(&(selector.to_string(), nth)).cloned())
    }

    async fn input_value(&self, selector: &str, nth: usize) -> Result<String> {
        let state = self.state.lock().unwrap();
        if let Some(value) = state.value_overrides.get(selector) {
            return Ok(value.clone());
        }
        // The last fill wins, like a live control
        let filled = state
            .fills
            .iter()
            .rev()
            .find(|f| f.selector == selector && f.nth == nth)
            .map(|f| f.value.clone());
        Ok(filled.unwrap_or_default())
    }

    async fn wait_for_selector(&self, selector: &str, _timeout_ms: u64) -> Result<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.element_counts.get(selector).copied().unwrap_or(0) > 0)
    }

    async fn wait_for_url(&self, _pattern: &str, _timeout_ms: u64) -> Result<bool> {
        Ok(true)
    }

    async fn delay(&self, _ms: u64) {
        // Tests never sleep
    }
}
