use serde::Serialize;

const XUL_NAMESPACE: &str = "http://www.mozilla.org/keymaster/gatekeeper/there.is.only.xul";
const DATA_URI_PREFIX: &str = "data:application/vnd.mozilla.xul+xml;charset=utf-8,";

/// Synthetic overlay document referencing every selected overlay unit
///
/// Loading one of these costs a single overlay-load call, however many units
/// it references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlayDocument {
    hrefs: Vec<String>,
}

impl OverlayDocument {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hrefs: hrefs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// One `<?xul-overlay?>` processing instruction per referenced unit
    pub fn directives(&self) -> Vec<String> {
        self.hrefs
            .iter()
            .map(|href| format!("<?xul-overlay href=\"{}\"?>", escape_attribute(href)))
            .collect()
    }

    pub fn to_markup(&self) -> String {
        format!(
            "<?xml version=\"1.0\"?>{}<overlay id=\"uc-loader-overlay\" xmlns=\"{}\"/>",
            self.directives().concat(),
            XUL_NAMESPACE
        )
    }

    /// The markup as a `data:` URI, for hosts that load overlays by URL
    pub fn to_data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, urlencoding::encode(&self.to_markup()))
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_in_order() {
        let overlay = OverlayDocument::new(["file:///a.uc.xul?1", "file:///b.uc.xul?2"]);

        assert_eq!(overlay.len(), 2);
        assert_eq!(
            overlay.directives(),
            vec![
                "<?xul-overlay href=\"file:///a.uc.xul?1\"?>",
                "<?xul-overlay href=\"file:///b.uc.xul?2\"?>",
            ]
        );
    }

    #[test]
    fn test_markup() {
        let overlay = OverlayDocument::new(["file:///a.uc.xul?1"]);
        assert_eq!(
            overlay.to_markup(),
            "<?xml version=\"1.0\"?><?xul-overlay href=\"file:///a.uc.xul?1\"?>\
             <overlay id=\"uc-loader-overlay\" \
             xmlns=\"http://www.mozilla.org/keymaster/gatekeeper/there.is.only.xul\"/>"
        );
    }

    #[test]
    fn test_attribute_escaping() {
        let overlay = OverlayDocument::new(["file:///a\"b&c<d.uc.xul"]);
        assert_eq!(
            overlay.directives()[0],
            "<?xul-overlay href=\"file:///a&quot;b&amp;c&lt;d.uc.xul\"?>"
        );
    }

    #[test]
    fn test_data_uri_is_percent_encoded() {
        let overlay = OverlayDocument::new(["file:///a.uc.xul?1"]);
        let uri = overlay.to_data_uri();

        assert!(uri.starts_with(DATA_URI_PREFIX));
        let encoded = &uri[DATA_URI_PREFIX.len()..];
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains(' '));
        assert_eq!(urlencoding::decode(encoded).unwrap(), overlay.to_markup());
    }
}
