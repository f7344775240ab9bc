//! Script header parsing

pub mod metadata_parser;

// Re-export commonly used items
pub use metadata_parser::{HEADER_END, HEADER_START, MetadataParser};
