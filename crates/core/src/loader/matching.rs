use std::sync::Arc;

use crate::{patterns::UrlPattern, types::{MetadataFields, ScriptUnit}};

/// Units chosen for one document, each list in registry order
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub to_execute: Vec<Arc<ScriptUnit>>,
    pub to_overlay: Vec<Arc<ScriptUnit>>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.to_execute.is_empty() && self.to_overlay.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_execute.len() + self.to_overlay.len()
    }
}

/// Whether a unit with `metadata` applies to `target_url`
///
/// Exclusion always wins. Without include rules a unit only applies to the
/// primary document.
pub fn unit_applies(metadata: &MetadataFields, target_url: &str, primary_url: &str) -> bool {
    if metadata
        .exclude
        .iter()
        .any(|pattern| pattern_matches(pattern, target_url, primary_url))
    {
        return false;
    }

    if metadata.include.is_empty() {
        return target_url == primary_url;
    }

    metadata
        .include
        .iter()
        .any(|pattern| pattern_matches(pattern, target_url, primary_url))
}

fn pattern_matches(pattern: &str, target_url: &str, primary_url: &str) -> bool {
    match UrlPattern::compile(pattern, primary_url) {
        Ok(compiled) => compiled.matches(target_url),
        Err(e) => {
            tracing::warn!("Ignoring pattern: {}", e);
            false
        }
    }
}
