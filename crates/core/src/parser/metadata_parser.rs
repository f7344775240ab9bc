use crate::types::MetadataFields;

/// Sentinel opening the header block, after the comment prefix
pub const HEADER_START: &str = "==UserScript==";
/// Sentinel closing the header block, after the comment prefix
pub const HEADER_END: &str = "==/UserScript==";

const COMMENT_PREFIX: &str = "//";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Extracts the `// ==UserScript==` header block of a script
pub struct MetadataParser;

impl MetadataParser {
    /// Parse the first header block of `raw`
    ///
    /// A missing or unterminated block yields empty fields. Lines inside the
    /// block that are not `// @key value` declarations are skipped.
    pub fn parse(raw: &str) -> MetadataFields {
        let raw = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
        let mut fields = MetadataFields::default();

        let mut lines = raw.lines();
        if !lines.by_ref().any(|line| is_sentinel(line, HEADER_START)) {
            return fields;
        }

        let mut terminated = false;
        for line in lines {
            if is_sentinel(line, HEADER_END) {
                terminated = true;
                break;
            }
            if let Some((key, value)) = parse_declaration(line) {
                fields.push(key, value.to_string());
            }
        }

        if !terminated {
            tracing::debug!("Header block has no end marker, ignoring it");
            return MetadataFields::default();
        }

        fields
    }
}

fn strip_comment(line: &str) -> Option<&str> {
    line.trim().strip_prefix(COMMENT_PREFIX).map(str::trim)
}

fn is_sentinel(line: &str, sentinel: &str) -> bool {
    strip_comment(line) == Some(sentinel)
}

/// Split `// @key value` into key and trimmed value
fn parse_declaration(line: &str) -> Option<(&str, &str)> {
    let declaration = strip_comment(line)?.strip_prefix('@')?;
    let (key, value) = declaration.split_once(char::is_whitespace)?;
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
