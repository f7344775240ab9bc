//! Configuration validation for ensuring configs are usable before scanning

use std::collections::HashSet;

use crate::{
    config::LoaderConfig,
    error::{Error, Result},
    patterns::UrlPattern,
    scanner::normalize_extension,
};

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &LoaderConfig) -> Result<()>;
}

/// Checks extension sets, roots and block-list patterns
#[derive(Debug, Default)]
pub struct LoaderConfigValidator;

impl LoaderConfigValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_extensions(&self, config: &LoaderConfig) -> Result<()> {
        let executable: HashSet<String> = config
            .executable_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        let overlay: HashSet<String> = config
            .overlay_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();

        if executable.is_empty() || executable.contains("") {
            return Err(Error::ConfigError(
                "executable_extensions must list at least one non-empty extension".to_string(),
            ));
        }
        if overlay.is_empty() || overlay.contains("") {
            return Err(Error::ConfigError(
                "overlay_extensions must list at least one non-empty extension".to_string(),
            ));
        }

        let mut shared: Vec<&String> = executable.intersection(&overlay).collect();
        if !shared.is_empty() {
            shared.sort();
            return Err(Error::ConfigError(format!(
                "Extensions declared both executable and overlay: {}",
                shared
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(())
    }

    fn validate_roots(&self, config: &LoaderConfig) -> Result<()> {
        if let Some(root) = config.roots.iter().find(|r| r.path.as_os_str().is_empty()) {
            return Err(Error::ConfigError(format!(
                "Scan root with empty path (recursive: {})",
                root.recursive
            )));
        }
        Ok(())
    }
}

impl ConfigValidator for LoaderConfigValidator {
    fn validate(&self, config: &LoaderConfig) -> Result<()> {
        self.validate_extensions(config)?;
        self.validate_roots(config)?;
        UrlPattern::compile_all(&config.block_list, &config.primary_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RootConfig;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LoaderConfigValidator::new().validate(&LoaderConfig::default()).is_ok());
    }

    #[test]
    fn test_overlapping_extensions_rejected() {
        let config = LoaderConfig {
            executable_extensions: vec!["uc.js".to_string(), ".uc.xul".to_string()],
            overlay_extensions: vec!["uc.xul".to_string()],
            ..Default::default()
        };
        let err = LoaderConfigValidator::new().validate(&config).unwrap_err();
        assert!(err.to_string().contains("uc.xul"));
    }

    #[test]
    fn test_empty_extension_sets_rejected() {
        let config = LoaderConfig {
            overlay_extensions: Vec::new(),
            ..Default::default()
        };
        assert!(LoaderConfigValidator::new().validate(&config).is_err());

        let config = LoaderConfig {
            executable_extensions: vec![".".to_string()],
            ..Default::default()
        };
        assert!(LoaderConfigValidator::new().validate(&config).is_err());
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = LoaderConfig {
            roots: vec![RootConfig {
                path: PathBuf::new(),
                recursive: true,
            }],
            ..Default::default()
        };
        assert!(matches!(
            LoaderConfigValidator::new().validate(&config),
            Err(Error::ConfigError(_))
        ));
    }
}
