use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identifier of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// A document scripts can be injected into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContext {
    pub id: DocumentId,
    pub url: String,
}

impl DocumentContext {
    pub fn new(id: u64, url: impl Into<String>) -> Self {
        Self {
            id: DocumentId(id),
            url: url.into(),
        }
    }
}
