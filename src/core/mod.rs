pub mod config;
pub mod error;
pub mod types;

pub use config::{CoverThresholds, DetectionConfig, FilterToggles, IntersectionMode};
pub use error::{CoverError, Result};
pub use types::TokenId;
