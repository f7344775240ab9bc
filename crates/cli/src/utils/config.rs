use anyhow::{Context, Result};
use std::path::Path;
use uc_loader_core::{
    LoaderConfig,
    config::{ConfigValidator, LoaderConfigValidator},
};

/// Load the explicit config file, or the nearest one above the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<LoaderConfig> {
    let config = match explicit {
        Some(path) => LoaderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            LoaderConfig::discover(&cwd)
                .with_context(|| format!("Failed to load config above {}", cwd.display()))?
        }
    };

    LoaderConfigValidator::new()
        .validate(&config)
        .context("Invalid configuration")?;
    Ok(config)
}
