use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    cache::FreshnessPolicy,
    error::{Error, Result},
    scanner::{ExtensionSets, ScanRoot},
};

/// File names searched for when looking up a configuration, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".uc-loader.json", "uc-loader.json"];

/// A directory scanned for scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoaderConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<RootConfig>,
    #[serde(default = "default_executable_extensions")]
    pub executable_extensions: Vec<String>,
    #[serde(default = "default_overlay_extensions")]
    pub overlay_extensions: Vec<String>,

    /// Primary document URL used when no host supplies one
    #[serde(default = "default_primary_url")]
    pub primary_url: String,
    #[serde(default = "default_block_list")]
    pub block_list: Vec<String>,
    #[serde(default)]
    pub freshness: FreshnessPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_host_version: Option<String>,

    /// File names never injected, unless also listed in `always_execute`
    #[serde(default)]
    pub disabled: Vec<String>,
    #[serde(default)]
    pub always_execute: Vec<String>,

    #[serde(default = "default_true")]
    pub sort_by_name: bool,

    // Directory relative root paths resolve against (internal, not exposed in JSON)
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_roots() -> Vec<RootConfig> {
    vec![RootConfig {
        path: PathBuf::from("."),
        recursive: false,
    }]
}

fn default_executable_extensions() -> Vec<String> {
    vec!["uc.js".to_string()]
}

fn default_overlay_extensions() -> Vec<String> {
    vec!["uc.xul".to_string()]
}

fn default_primary_url() -> String {
    "chrome://browser/content/browser.xhtml".to_string()
}

fn default_block_list() -> Vec<String> {
    vec!["about:blank".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            executable_extensions: default_executable_extensions(),
            overlay_extensions: default_overlay_extensions(),
            primary_url: default_primary_url(),
            block_list: default_block_list(),
            freshness: FreshnessPolicy::default(),
            min_host_version: None,
            disabled: Vec::new(),
            always_execute: Vec::new(),
            sort_by_name: true,
            base_dir: None,
        }
    }
}

impl LoaderConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        // Roots resolve against this, and unit locations need absolute paths
        config.base_dir = std::path::absolute(path)?.parent().map(Path::to_path_buf);
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or defaults rooted there
    pub fn discover(start_path: &Path) -> Result<Self> {
        let start_path = std::path::absolute(start_path)?;
        match Self::find_config_file(&start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config found above {:?}, using defaults", start_path);
                Ok(Self {
                    base_dir: Some(start_path),
                    ..Self::default()
                })
            }
        }
    }

    /// Scan roots with relative paths resolved against the config directory
    pub fn scan_roots(&self) -> Vec<ScanRoot> {
        self.roots
            .iter()
            .map(|root| {
                let path = match (&self.base_dir, root.path.is_absolute()) {
                    (Some(base), false) => base.join(&root.path),
                    _ => root.path.clone(),
                };
                ScanRoot::new(path, root.recursive)
            })
            .collect()
    }

    pub fn extension_sets(&self) -> ExtensionSets {
        ExtensionSets::new(&self.executable_extensions, &self.overlay_extensions)
    }
}
