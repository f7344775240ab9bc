use super::UrlPattern;
use crate::{error::Result, interfaces::BlockPolicy};

/// Deny list of wildcard patterns, independent of any script's own rules
#[derive(Debug, Clone, Default)]
pub struct BlockList {
    patterns: Vec<UrlPattern>,
}

impl BlockList {
    pub fn new<S: AsRef<str>>(patterns: &[S], primary_url: &str) -> Result<Self> {
        Ok(Self {
            patterns: UrlPattern::compile_all(patterns, primary_url)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl BlockPolicy for BlockList {
    fn is_blocked(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(url))
    }
}
