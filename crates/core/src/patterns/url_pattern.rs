use regex::Regex;

use crate::error::{Error, Result};

/// Pattern token standing for the host's primary document URL
pub const PRIMARY_ALIAS: &str = "main";

const WILDCARD: char = '*';

/// Substitute the primary URL when `pattern` is the alias token
pub fn resolve_alias<'a>(pattern: &'a str, primary_url: &'a str) -> &'a str {
    if pattern.eq_ignore_ascii_case(PRIMARY_ALIAS) {
        primary_url
    } else {
        pattern
    }
}

/// A compiled wildcard pattern matched against whole URLs
///
/// `*` matches any sequence, including the empty one. Every other character
/// is literal.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    source: String,
    regex: Regex,
}

impl UrlPattern {
    /// Compile `pattern`, resolving the alias token against `primary_url`
    pub fn compile(pattern: &str, primary_url: &str) -> Result<Self> {
        let source = resolve_alias(pattern, primary_url);
        let body = source
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*?");
        let regex = Regex::new(&format!("^(?s:{body})$"))
            .map_err(|e| Error::PatternError(format!("Invalid pattern '{pattern}': {e}")))?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Compile a list of patterns, stopping at the first invalid one
    pub fn compile_all<S: AsRef<str>>(patterns: &[S], primary_url: &str) -> Result<Vec<Self>> {
        patterns
            .iter()
            .map(|p| Self::compile(p.as_ref(), primary_url))
            .collect()
    }

    /// The pattern after alias resolution
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: &str = "chrome://browser/content/browser.xhtml";

    fn matches(pattern: &str, url: &str) -> bool {
        UrlPattern::compile(pattern, PRIMARY).unwrap().matches(url)
    }

    #[test]
    fn test_literal_pattern() {
        assert!(matches("chrome://x/y.xul", "chrome://x/y.xul"));
        assert!(!matches("chrome://x/y.xul", "chrome://x/y.xulz"));
        assert!(!matches("chrome://x/y.xul", "xchrome://x/y.xul"));
    }

    #[test]
    fn test_wildcard_is_anchored() {
        assert!(matches("chrome://a/*", "chrome://a/x"));
        assert!(matches("chrome://a/*", "chrome://a/"));
        assert!(!matches("chrome://a/*", "chrome://ab/x"));
    }

    #[test]
    fn test_lone_wildcard_matches_everything() {
        assert!(matches("*", ""));
        assert!(matches("*", "about:blank"));
        assert!(matches("*", "line\nbreak"));
    }

    #[test]
    fn test_special_characters_are_literal() {
        assert!(matches("about:config?filter=a.b", "about:config?filter=a.b"));
        assert!(!matches("about:config?filter=a.b", "about:confiX?filter=aXb"));
        assert!(matches("chrome://(x)/[y]+{z}|$^\\", "chrome://(x)/[y]+{z}|$^\\"));
    }

    #[test]
    fn test_multiple_wildcards() {
        assert!(matches("chrome://*/content/*.xul", "chrome://global/content/a.xul"));
        assert!(!matches("chrome://*/content/*.xul", "chrome://global/skin/a.xul"));
    }

    #[test]
    fn test_alias_resolution() {
        assert!(matches("main", PRIMARY));
        assert!(matches("MAIN", PRIMARY));
        assert!(!matches("main", "main"));
        assert_eq!(UrlPattern::compile("Main", PRIMARY).unwrap().as_str(), PRIMARY);
        assert_eq!(resolve_alias("mainly", PRIMARY), "mainly");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!matches("chrome://X/*", "chrome://x/y"));
    }

    #[test]
    fn test_compile_all() {
        let compiled = UrlPattern::compile_all(&["main", "about:*"], PRIMARY).unwrap();
        assert_eq!(compiled.len(), 2);
        assert!(compiled[1].matches("about:addons"));
    }
}
