//! Matching units against documents and injecting them

pub mod matching;
pub mod overlay;
pub mod unit_loader;

pub use matching::{Selection, unit_applies};
pub use overlay::OverlayDocument;
pub use unit_loader::{InjectionSummary, Loader};
