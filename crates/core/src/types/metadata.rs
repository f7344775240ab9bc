use serde::{Deserialize, Serialize};

/// Header fields declared by a script file
///
/// Every sequence keeps declaration order and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFields {
    pub name: Vec<String>,
    pub description: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Declarations with keys the loader does not interpret, kept for diagnostics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl MetadataFields {
    /// True when none of the four recognized fields carries a value
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.include.is_empty()
            && self.exclude.is_empty()
    }

    /// Append a declaration, routing it to the matching field
    pub(crate) fn push(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name.push(value),
            "description" => self.description.push(value),
            "include" => self.include.push(value),
            "exclude" => self.exclude.push(value),
            _ => self.extra.push((key.to_string(), value)),
        }
    }
}
