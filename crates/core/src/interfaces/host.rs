use crate::{loader::OverlayDocument, types::DocumentContext};

/// Services the surrounding application provides to the loader
pub trait Host {
    /// The well-known main document URL, matchable through the `main` alias
    fn primary_url(&self) -> String;

    /// Run the script at `location` inside `document`
    ///
    /// Fire and forget: failures are reported by the host itself.
    fn execute_in_context(&self, location: &str, document: &DocumentContext);

    /// Load one synthetic overlay document into `document`
    fn load_overlay_document(&self, overlay: &OverlayDocument, document: &DocumentContext);

    /// One-time compatibility check performed when a session opens
    fn host_version_satisfies(&self, min_version: &str) -> bool;
}
