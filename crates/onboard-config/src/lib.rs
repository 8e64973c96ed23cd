//! onboard-config
//!
//! User-tunable settings for the onboarding CLI and their on-disk persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{resolve_home, Config, ConfigKey, HOME_ENV};
