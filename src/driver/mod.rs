pub mod traits;
pub mod web;

#[cfg(test)]
pub mod mock;

pub use traits::PageDriver;
pub use web::driver::{BrowserKind, WebDriver, WebDriverConfig};
