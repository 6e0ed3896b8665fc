//! User configuration for Codequill
//!
//! Optional defaults stored in ~/.codequill/config.toml, or in the file
//! named by `--config` / `CODEQUILL_CONFIG`.

pub mod user_config;

// Re-export commonly used items
pub use user_config::{UserConfig, CONFIG_ENV};
