pub mod driver;
pub mod facade;
pub mod interact;
pub mod scenario;
pub mod utils;

// Re-export common items
pub use facade::PlaygroundHelper;
pub use scenario::{FormData, ScenarioError};
pub use utils::config::PlaygroundConfig;
