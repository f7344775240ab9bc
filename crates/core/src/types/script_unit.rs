use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::MetadataFields;
use crate::cache::{FreshnessPolicy, freshness};
use crate::error::{Error, Result};
use crate::impl_case_insensitive_deserialize;

/// How a unit is injected into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    /// Loaded directly into the document's execution context
    Executable,
    /// Merged into the synthetic overlay document
    Overlay,
}

impl_case_insensitive_deserialize!(
    ScriptKind,
    Executable => "executable",
    Overlay => "overlay"
);

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptKind::Executable => write!(f, "executable"),
            ScriptKind::Overlay => write!(f, "overlay"),
        }
    }
}

/// Names derived from a unit's location, computed once at scan time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitIdentity {
    pub file_name: String,
    /// Path relative to the scan root, always `/` separated
    pub relative_path: String,
    /// `file://` URL of the unit, without query
    pub location: String,
    /// Modification time captured by the scanner
    pub scanned_modified: Option<u64>,
}

/// One discovered script file
///
/// A unit never changes after construction; rescanning produces new units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptUnit {
    path: PathBuf,
    kind: ScriptKind,
    metadata: MetadataFields,
    identity: UnitIdentity,
}

impl ScriptUnit {
    /// Build a unit for `path`, found below the scan `root`
    pub fn new(
        path: PathBuf,
        root: &Path,
        kind: ScriptKind,
        metadata: MetadataFields,
        modified: Option<SystemTime>,
    ) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::ScanError(format!("no file name in {}", path.display())))?;

        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let location = url::Url::from_file_path(&path)
            .map_err(|_| Error::ScanError(format!("not an absolute path: {}", path.display())))?
            .to_string();

        Ok(Self {
            identity: UnitIdentity {
                file_name,
                relative_path,
                location,
                scanned_modified: modified.and_then(freshness::to_millis),
            },
            path,
            kind,
            metadata,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    pub fn metadata(&self) -> &MetadataFields {
        &self.metadata
    }

    pub fn identity(&self) -> &UnitIdentity {
        &self.identity
    }

    pub fn file_name(&self) -> &str {
        &self.identity.file_name
    }

    pub fn relative_path(&self) -> &str {
        &self.identity.relative_path
    }

    pub fn location(&self) -> &str {
        &self.identity.location
    }

    /// First declared `@name`, falling back to the file name
    pub fn display_name(&self) -> &str {
        self.metadata
            .name
            .first()
            .map(String::as_str)
            .unwrap_or(self.identity.file_name.as_str())
    }

    /// Location with the freshness token appended as query
    pub fn run_url(&self, policy: FreshnessPolicy) -> String {
        let token = match policy {
            FreshnessPolicy::ScanTime => self.identity.scanned_modified,
            FreshnessPolicy::Restat => {
                freshness::modified_millis(&self.path).or(self.identity.scanned_modified)
            }
        };
        format!("{}?{}", self.identity.location, token.unwrap_or(0))
    }
}
