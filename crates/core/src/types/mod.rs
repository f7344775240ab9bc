pub mod document;
pub mod metadata;
pub mod script_unit;

// Re-export commonly used types
pub use document::{DocumentContext, DocumentId};
pub use metadata::MetadataFields;
pub use script_unit::{ScriptKind, ScriptUnit, UnitIdentity};
