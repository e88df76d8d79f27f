//! Interaction primitives that tolerate selector drift
//!
//! Each primitive takes an ordered list of locator candidates and acts on
//! the first one that resolves to at least one element. A cosmetic selector
//! change on the target page must never abort a whole run while an
//! alternative candidate is available, so per-candidate failures are
//! swallowed and only total exhaustion is reported, as a logged warning.

use log::warn;

use crate::driver::PageDriver;

/// Outcome of evaluating a candidate list against the current page
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// First candidate with at least one matching element
    Found(&'a str),
    /// No candidate matched anything
    NotFound,
}

/// Evaluate candidates left to right; the first with one or more matches
/// wins. A candidate that errors is skipped and never retried.
pub async fn resolve_first<'a>(
    driver: &dyn PageDriver,
    candidates: &[&'a str],
) -> Resolution<'a> {
    for &candidate in candidates {
        match driver.count(candidate).await {
            Ok(n) if n > 0 => return Resolution::Found(candidate),
            Ok(_) => {}
            Err(_) => {} // next candidate
        }
    }
    Resolution::NotFound
}

/// Best-effort fill: acts on the first match of the first resolving
/// candidate. Completes without raising even when every candidate is
/// exhausted or the fill action itself fails.
pub async fn fill_safely(driver: &dyn PageDriver, candidates: &[&str], value: &str) {
    match resolve_first(driver, candidates).await {
        Resolution::Found(selector) => {
            if let Err(err) = driver.fill(selector, 0, value).await {
                warn!("Fill failed on '{}': {:#}", selector, err);
            }
        }
        Resolution::NotFound => {
            warn!(
                "Could not fill any of the selectors: {}",
                candidates.join(", ")
            );
        }
    }
}

/// Best-effort click with the same exhaustion policy as `fill_safely`
pub async fn click_safely(driver: &dyn PageDriver, candidates: &[&str]) {
    match resolve_first(driver, candidates).await {
        Resolution::Found(selector) => {
            if let Err(err) = driver.click(selector, 0).await {
                warn!("Click failed on '{}': {:#}", selector, err);
            }
        }
        Resolution::NotFound => {
            warn!(
                "Could not click any of the selectors: {}",
                candidates.join(", ")
            );
        }
    }
}

/// Safe wait that doesn't fail when the element never appears
pub async fn wait_safely(driver: &dyn PageDriver, candidate: &str, timeout_ms: u64) -> bool {
    driver
        .wait_for_selector(candidate, timeout_ms)
        .await
        .unwrap_or(false)
}
