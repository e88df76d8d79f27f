//! Slider value resolution strategies
//!
//! No single selector reliably exposes a slider's current value across the
//! playground's widget variants, so each strategy reads it under a different
//! structural assumption. Strategies are tried in order; earlier ones are
//! preferred because they reflect the labelled display value rather than an
//! implementation detail of the control.

use anyhow::Result;
use async_trait::async_trait;

use crate::driver::PageDriver;

/// Known class names for tooltip and bubble value displays
const TOOLTIP_SELECTOR: &str =
    ".range-slider__tooltip, .rangeslider__value-bubble, .rangeslider__tooltip, .slider-value";

/// Native range controls
pub(crate) const RANGE_INPUT_SELECTOR: &str = "input[type=\"range\"]";

/// One way of reading a slider widget's displayed or underlying value
#[async_trait]
pub trait ValueStrategy: Send + Sync {
    /// Strategy name for diagnostics
    fn name(&self) -> &'static str;

    /// Attempt to read the value of the widget at `index`
    ///
    /// Ok(None) means this strategy's structural assumption doesn't hold on
    /// the current page.
    async fn read(&self, driver: &dyn PageDriver, index: usize) -> Result<Option<String>>;
}

/// Dedicated `<output>` element at the widget position
pub struct OutputElement;

#[async_trait]
impl ValueStrategy for OutputElement {
    fn name(&self) -> &'static str {
        "output-element"
    }

    async fn read(&self, driver: &dyn PageDriver, index: usize) -> Result<Option<String>> {
        let count = driver.count("output").await?;
        if count > index {
            return driver.text_content("output", index).await;
        }
        Ok(None)
    }
}

/// Tooltip or bubble element styled with one of the known class names
pub struct TooltipBubble;

#[async_trait]
impl ValueStrategy for TooltipBubble {
    fn name(&self) -> &'static str {
        "tooltip-bubble"
    }

    async fn read(&self, driver: &dyn PageDriver, index: usize) -> Result<Option<String>> {
        let count = driver.count(TOOLTIP_SELECTOR).await?;
        if count > index {
            return driver.text_content(TOOLTIP_SELECTOR, index).await;
        }
        Ok(None)
    }
}

/// Raw value attribute of the range control itself
pub struct ValueAttribute;

#[async_trait]
impl ValueStrategy for ValueAttribute {
    fn name(&self) -> &'static str {
        "value-attribute"
    }

    async fn read(&self, driver: &dyn PageDriver, index: usize) -> Result<Option<String>> {
        driver.get_attribute(RANGE_INPUT_SELECTOR, index, "value").await
    }
}

/// The production chain, most semantic source first
pub fn default_chain() -> Vec<Box<dyn ValueStrategy>> {
    vec![
        Box::new(OutputElement),
        Box::new(TooltipBubble),
        Box::new(ValueAttribute),
    ]
}

/// Evaluate the chain in order and return the first non-null result. A
/// strategy that errors is skipped, never retried. Returns None when every
/// strategy fails.
pub async fn resolve_value(
    driver: &dyn PageDriver,
    index: usize,
    chain: &[Box<dyn ValueStrategy>],
) -> Option<String> {
    for strategy in chain {
        match strategy.read(driver, index).await {
            Ok(Some(value)) => return Some(value),
            Ok(None) => {}
            Err(err) => {
                log::debug!("Value strategy '{}' failed: {:#}", strategy.name(), err);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::MockPageDriver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingStrategy {
        calls: Arc<AtomicUsize>,
        result: Result<Option<String>, ()>,
    }

    impl CountingStrategy {
        fn returning(calls: Arc<AtomicUsize>, value: Option<&str>) -> Box<dyn ValueStrategy> {
            Box::new(Self {
                calls,
                result: Ok(value.map(str::to_string)),
            })
        }

        fn failing(calls: Arc<AtomicUsize>) -> Box<dyn ValueStrategy> {
            Box::new(Self {
                calls,
                result: Err(()),
            })
        }
    }

    #[async_trait]
    impl ValueStrategy for CountingStrategy {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn read(
            &self,
            _driver: &dyn PageDriver,
            _index: usize,
        ) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(value) => Ok(value.clone()),
                Err(()) => anyhow::bail!("strategy error"),
            }
        }
    }

    #[tokio::test]
    async fn test_chain_returns_earliest_non_null() {
        let mock = MockPageDriver::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let chain = vec![
            CountingStrategy::returning(first.clone(), Some("40")),
            CountingStrategy::returning(second.clone(), Some("99")),
        ];

        let value = resolve_value(&mock, 0, &chain).await;

        assert_eq!(value.as_deref(), Some("40"));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        // Later strategies are never evaluated once one succeeds
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chain_skips_null_and_error_results() {
        let mock = MockPageDriver::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = vec![
            CountingStrategy::returning(calls.clone(), None),
            CountingStrategy::failing(calls.clone()),
            CountingStrategy::returning(calls.clone(), Some("7")),
        ];

        let value = resolve_value(&mock, 0, &chain).await;

        assert_eq!(value.as_deref(), Some("7"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_chain_exhaustion_returns_none() {
        let mock = MockPageDriver::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = vec![
            CountingStrategy::returning(calls.clone(), None),
            CountingStrategy::failing(calls.clone()),
        ];

        assert_eq!(resolve_value(&mock, 0, &chain).await, None);
    }

    #[tokio::test]
    async fn test_output_element_reads_positional_text() {
        let mock = MockPageDriver::new();
        mock.add_element("output", 3);
        mock.set_text("output", 1, "55");

        let value = OutputElement.read(&mock, 1).await.unwrap();
        assert_eq!(value.as_deref(), Some("55"));

        // Index past the discovered count means the assumption doesn't hold
        let missing = OutputElement.read(&mock, 5).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_tooltip_bubble_reads_positional_text() {
        let mock = MockPageDriver::new();
        mock.add_element(TOOLTIP_SELECTOR, 2);
        mock.set_text(TOOLTIP_SELECTOR, 0, "12");

        let value = TooltipBubble.read(&mock, 0).await.unwrap();
        assert_eq!(value.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn test_value_attribute_reads_control_attribute() {
        let mock = MockPageDriver::new();
        mock.add_element(RANGE_INPUT_SELECTOR, 1);
        mock.set_attribute(RANGE_INPUT_SELECTOR, 0, "value", "15");

        let value = ValueAttribute.read(&mock, 0).await.unwrap();
        assert_eq!(value.as_deref(), Some("15"));

        let absent = ValueAttribute.read(&mock, 4).await.unwrap();
        assert_eq!(absent, None);
    }
}
