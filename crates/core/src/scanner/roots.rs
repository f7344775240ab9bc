use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::ScriptKind;

/// A directory to scan and whether to descend into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub recursive: bool,
}

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }
}

/// Extensions are compared without leading dots and ignoring ASCII case
pub fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// Everything after the first dot of a file name
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name
        .split_once('.')
        .map(|(_, extension)| extension)
        .filter(|extension| !extension.is_empty())
}

/// The two extension allow-lists deciding a file's kind
#[derive(Debug, Clone, Default)]
pub struct ExtensionSets {
    executable: HashSet<String>,
    overlay: HashSet<String>,
}

impl ExtensionSets {
    pub fn new<S: AsRef<str>>(executable: &[S], overlay: &[S]) -> Self {
        let collect = |list: &[S]| {
            list.iter()
                .map(|e| normalize_extension(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect::<HashSet<_>>()
        };
        Self {
            executable: collect(executable),
            overlay: collect(overlay),
        }
    }

    /// Kind of a file, or `None` if neither list claims it
    pub fn classify(&self, file_name: &str) -> Option<ScriptKind> {
        let extension = normalize_extension(extension_of(file_name)?);
        if self.executable.contains(&extension) {
            Some(ScriptKind::Executable)
        } else if self.overlay.contains(&extension) {
            Some(ScriptKind::Overlay)
        } else {
            None
        }
    }
}
