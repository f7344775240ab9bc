use std::sync::Arc;

use crate::{
    scanner::{ScanReport, ScanWarning},
    types::{ScriptKind, ScriptUnit},
};

/// The units of one scan, partitioned by kind
///
/// Read-only after construction.
#[derive(Debug, Default)]
pub struct Registry {
    executable: Vec<Arc<ScriptUnit>>,
    overlay: Vec<Arc<ScriptUnit>>,
    warnings: Vec<ScanWarning>,
}

impl Registry {
    pub fn from_report(report: ScanReport) -> Self {
        let mut registry = Self::from_units(report.units);
        registry.warnings = report.warnings;
        registry
    }

    pub fn from_units(units: impl IntoIterator<Item = ScriptUnit>) -> Self {
        let (executable, overlay): (Vec<_>, Vec<_>) = units
            .into_iter()
            .map(Arc::new)
            .partition(|unit| unit.kind() == ScriptKind::Executable);

        Self {
            executable,
            overlay,
            warnings: Vec::new(),
        }
    }

    pub fn executable(&self) -> &[Arc<ScriptUnit>] {
        &self.executable
    }

    pub fn overlay(&self) -> &[Arc<ScriptUnit>] {
        &self.overlay
    }

    pub fn units(&self, kind: ScriptKind) -> &[Arc<ScriptUnit>] {
        match kind {
            ScriptKind::Executable => &self.executable,
            ScriptKind::Overlay => &self.overlay,
        }
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.executable.len() + self.overlay.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All units, executable first, each group in scan order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ScriptUnit>> {
        self.executable.iter().chain(self.overlay.iter())
    }
}
