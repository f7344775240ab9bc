//! Discovery of script files below the configured roots

pub mod roots;
pub mod walker;

pub use roots::{ExtensionSets, ScanRoot, extension_of, normalize_extension};
pub use walker::{ScanReport, ScanWarning, Scanner};
