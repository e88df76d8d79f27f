use anyhow::Result;
use async_trait::async_trait;

/// Abstract page handle consumed by the interaction layer
///
/// This trait defines the operations the scenario helpers need from a
/// browser-automation engine. It abstracts away the engine-specific details
/// so the resilient interaction logic can be exercised against a real
/// browser or an in-memory page model.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL and wait for load completion
    async fn goto(&self, url: &str) -> Result<()>;

    /// Number of elements currently matching `selector`
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Fill the nth element matching `selector` with `value`
    async fn fill(&self, selector: &str, nth: usize, value: &str) -> Result<()>;

    /// Click the nth element matching `selector`
    async fn click(&self, selector: &str, nth: usize) -> Result<()>;

    /// Select a dropdown option by its visible label on the first element
    /// matching `selector`
    ///
    /// # Returns
    /// True if an option was selected, false if the dropdown or the label
    /// was not found.
    async fn select_by_label(&self, selector: &str, label: &str) -> Result<bool>;

    /// Attribute value of the nth match, or None if the element or the
    /// attribute is absent
    async fn get_attribute(
        &self,
        selector: &str,
        nth: usize,
        name: &str,
    ) -> Result<Option<String>>;

    /// Text content of the nth match, or None if the element is absent
    async fn text_content(&self, selector: &str, nth: usize) -> Result<Option<String>>;

    /// Live value property of the nth match (form controls)
    async fn input_value(&self, selector: &str, nth: usize) -> Result<String>;

    /// Wait up to `timeout_ms` for `selector` to appear
    ///
    /// # Returns
    /// True if the element appeared, false on timeout.
    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<bool>;

    /// Wait up to `timeout_ms` for the current URL to match the regex
    /// `pattern`
    async fn wait_for_url(&self, pattern: &str, timeout_ms: u64) -> Result<bool>;

    /// Unconditional timed delay
    async fn delay(&self, ms: u64);
}
