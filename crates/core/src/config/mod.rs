//! Configuration management for uc-loader

mod settings;
pub mod validation;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, LoaderConfig, RootConfig};
pub use validation::{ConfigValidator, LoaderConfigValidator};
