use std::cell::RefCell;
use std::cmp::Ordering;
use uc_loader_core::{DocumentContext, Host, OverlayDocument};

/// Host that records what would be injected instead of running anything
#[derive(Debug)]
pub struct PreviewHost {
    primary_url: String,
    version: Option<String>,
    pub executed: RefCell<Vec<String>>,
    pub overlays: RefCell<Vec<OverlayDocument>>,
}

impl PreviewHost {
    pub fn new(primary_url: impl Into<String>, version: Option<String>) -> Self {
        Self {
            primary_url: primary_url.into(),
            version,
            executed: RefCell::new(Vec::new()),
            overlays: RefCell::new(Vec::new()),
        }
    }
}

impl Host for PreviewHost {
    fn primary_url(&self) -> String {
        self.primary_url.clone()
    }

    fn execute_in_context(&self, location: &str, _document: &DocumentContext) {
        self.executed.borrow_mut().push(location.to_string());
    }

    fn load_overlay_document(&self, overlay: &OverlayDocument, _document: &DocumentContext) {
        self.overlays.borrow_mut().push(overlay.clone());
    }

    fn host_version_satisfies(&self, min_version: &str) -> bool {
        // Without a version to compare, assume a current host
        match &self.version {
            Some(version) => compare_versions(version, min_version) != Ordering::Less,
            None => true,
        }
    }
}

/// Compare dotted versions numerically; missing or non-numeric parts count as 0
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|part| {
                part.chars()
                    .take_while(char::is_ascii_digit)
                    .collect::<String>()
                    .parse()
                    .unwrap_or(0)
            })
            .collect()
    };
    let (a, b) = (parse(a), parse(b));
    let len = a.len().max(b.len());

    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
