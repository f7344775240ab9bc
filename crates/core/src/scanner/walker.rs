use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::{ExtensionSets, ScanRoot};
use crate::{
    config::LoaderConfig,
    interfaces::UnitSource,
    parser::MetadataParser,
    types::{ScriptKind, ScriptUnit},
};

/// A directory entry that could not be read; the scan skipped it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<walkdir::Error> for ScanWarning {
    fn from(err: walkdir::Error) -> Self {
        Self {
            path: err.path().map(Path::to_path_buf),
            message: err.to_string(),
        }
    }
}

/// Result of one scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub units: Vec<ScriptUnit>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    pub fn count(&self, kind: ScriptKind) -> usize {
        self.units.iter().filter(|u| u.kind() == kind).count()
    }
}

/// Walks the scan roots and turns matching files into units
#[derive(Debug, Clone)]
pub struct Scanner {
    roots: Vec<ScanRoot>,
    extensions: ExtensionSets,
    sort_by_name: bool,
}

impl Scanner {
    pub fn new(roots: Vec<ScanRoot>, extensions: ExtensionSets) -> Self {
        Self {
            roots,
            extensions,
            sort_by_name: true,
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.scan_roots(), config.extension_sets()).with_sorting(config.sort_by_name)
    }

    /// Sort entries by file name inside each directory (default `true`)
    pub fn with_sorting(mut self, sort_by_name: bool) -> Self {
        self.sort_by_name = sort_by_name;
        self
    }

    pub fn roots(&self) -> &[ScanRoot] {
        &self.roots
    }

    /// Scan every root in order
    ///
    /// Missing roots are skipped silently. Unreadable entries become
    /// warnings and never abort the scan.
    pub fn scan(&self) -> ScanReport {
        let mut report = ScanReport::default();

        for root in &self.roots {
            if !root.path.exists() {
                tracing::debug!("Skipping missing scan root {:?}", root.path);
                continue;
            }
            self.scan_root(root, &mut report);
        }

        tracing::info!(
            "Scanned {} root(s): {} executable, {} overlay, {} warning(s)",
            self.roots.len(),
            report.count(ScriptKind::Executable),
            report.count(ScriptKind::Overlay),
            report.warnings.len()
        );
        report
    }

    fn scan_root(&self, root: &ScanRoot, report: &mut ScanReport) {
        let mut walker = WalkDir::new(&root.path).min_depth(1).follow_links(true);
        if !root.recursive {
            walker = walker.max_depth(1);
        }
        if self.sort_by_name {
            walker = walker.sort_by_file_name();
        }

        // The root itself is exempt: "." would otherwise count as hidden
        let entries = walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let warning = ScanWarning::from(err);
                    tracing::warn!("Skipping unreadable entry: {}", warning);
                    report.warnings.push(warning);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(kind) = self
                .extensions
                .classify(&entry.file_name().to_string_lossy())
            else {
                continue;
            };

            match load_unit(&entry, &root.path, kind) {
                Ok(unit) => {
                    tracing::debug!("Found {} unit {}", kind, unit.relative_path());
                    report.units.push(unit);
                }
                Err(warning) => {
                    tracing::warn!("Skipping unreadable script: {}", warning);
                    report.warnings.push(warning);
                }
            }
        }
    }
}

impl UnitSource for Scanner {
    fn scan(&self) -> ScanReport {
        Scanner::scan(self)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn load_unit(entry: &DirEntry, root: &Path, kind: ScriptKind) -> Result<ScriptUnit, ScanWarning> {
    let warning = |message: String| ScanWarning {
        path: Some(entry.path().to_path_buf()),
        message,
    };

    let bytes = std::fs::read(entry.path()).map_err(|e| warning(e.to_string()))?;
    let metadata = MetadataParser::parse(&String::from_utf8_lossy(&bytes));
    let modified = entry.metadata().ok().and_then(|m| m.modified().ok());

    ScriptUnit::new(entry.path().to_path_buf(), root, kind, metadata, modified)
        .map_err(|e| warning(e.to_string()))
}
