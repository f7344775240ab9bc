use std::collections::HashSet;

use super::{OverlayDocument, Selection, unit_applies};
use crate::{
    cache::FreshnessPolicy,
    config::LoaderConfig,
    interfaces::Host,
    registry::Registry,
    types::{DocumentContext, ScriptUnit},
};

/// What one injection pass handed to the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectionSummary {
    pub executed: usize,
    /// Units referenced by the overlay document, zero if none was loaded
    pub overlaid: usize,
}

/// Picks the units that apply to a document and hands them to the host
#[derive(Debug, Clone, Default)]
pub struct Loader {
    freshness: FreshnessPolicy,
    disabled: HashSet<String>,
    always_execute: HashSet<String>,
}

impl Loader {
    pub fn new(freshness: FreshnessPolicy) -> Self {
        Self {
            freshness,
            ..Self::default()
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.freshness)
            .with_disabled(config.disabled.iter().cloned())
            .with_always_execute(config.always_execute.iter().cloned())
    }

    /// File names that are never injected
    pub fn with_disabled(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.disabled.extend(names);
        self
    }

    /// File names injected even when disabled
    pub fn with_always_execute(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.always_execute.extend(names);
        self
    }

    pub fn freshness(&self) -> FreshnessPolicy {
        self.freshness
    }

    fn is_disabled(&self, unit: &ScriptUnit) -> bool {
        let name = unit.file_name();
        self.disabled.contains(name) && !self.always_execute.contains(name)
    }

    /// Units of `registry` that apply to `target_url`
    pub fn select(&self, registry: &Registry, target_url: &str, primary_url: &str) -> Selection {
        let accepts = |unit: &ScriptUnit| {
            if self.is_disabled(unit) {
                tracing::debug!("{} is disabled", unit.relative_path());
                return false;
            }
            let applies = unit_applies(unit.metadata(), target_url, primary_url);
            tracing::debug!(
                "{} {} {}",
                unit.relative_path(),
                if applies { "applies to" } else { "skips" },
                target_url
            );
            applies
        };

        Selection {
            to_execute: registry
                .executable()
                .iter()
                .filter(|unit| accepts(unit))
                .cloned()
                .collect(),
            to_overlay: registry
                .overlay()
                .iter()
                .filter(|unit| accepts(unit))
                .cloned()
                .collect(),
        }
    }

    /// Batch the selected overlay units into one synthetic document
    pub fn overlay_document(&self, selection: &Selection) -> OverlayDocument {
        OverlayDocument::new(
            selection
                .to_overlay
                .iter()
                .map(|unit| unit.run_url(self.freshness)),
        )
    }

    /// Execute the selected executable units one by one, then load all
    /// overlay units with a single call
    pub fn inject(
        &self,
        host: &dyn Host,
        document: &DocumentContext,
        selection: &Selection,
    ) -> InjectionSummary {
        for unit in &selection.to_execute {
            let location = unit.run_url(self.freshness);
            tracing::debug!("Executing {} in {}", location, document.id);
            host.execute_in_context(&location, document);
        }

        let overlay = self.overlay_document(selection);
        if !overlay.is_empty() {
            tracing::debug!(
                "Loading overlay with {} unit(s) into {}",
                overlay.len(),
                document.id
            );
            host.load_overlay_document(&overlay, document);
        }

        InjectionSummary {
            executed: selection.to_execute.len(),
            overlaid: overlay.len(),
        }
    }

    /// Select against the host's primary URL and inject in one go
    pub fn apply(
        &self,
        host: &dyn Host,
        registry: &Registry,
        document: &DocumentContext,
    ) -> InjectionSummary {
        let primary_url = host.primary_url();
        let selection = self.select(registry, &document.url, &primary_url);
        self.inject(host, document, &selection)
    }
}
