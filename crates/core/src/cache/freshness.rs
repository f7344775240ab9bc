use serde::Serialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::impl_case_insensitive_deserialize;

/// Where the freshness token of a run URL comes from
///
/// The token only exists so that a host cache keyed by URL treats an edited
/// file as a new resource. It says nothing about content identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessPolicy {
    /// Use the modification time captured when the file was scanned
    #[default]
    ScanTime,
    /// Stat the file again every time a run URL is produced
    Restat,
}

impl_case_insensitive_deserialize!(
    FreshnessPolicy,
    ScanTime => "scan_time",
    Restat => "restat"
);

/// Milliseconds since the Unix epoch for a timestamp
pub fn to_millis(time: SystemTime) -> Option<u64> {
    time.duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}

/// Current modification time of a file in milliseconds, if it can be read
pub fn modified_millis(path: &Path) -> Option<u64> {
    let metadata = std::fs::metadata(path).ok()?;
    to_millis(metadata.modified().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_to_millis() {
        let time = UNIX_EPOCH + Duration::from_millis(1_234_567);
        assert_eq!(to_millis(time), Some(1_234_567));
    }

    #[test]
    fn test_modified_millis_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(modified_millis(&temp_dir.path().join("gone.uc.js")), None);
    }

    #[test]
    fn test_modified_millis_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.uc.js");
        std::fs::write(&path, "").unwrap();
        assert!(modified_millis(&path).is_some());
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: FreshnessPolicy = serde_json::from_str(r#""Restat""#).unwrap();
        assert_eq!(policy, FreshnessPolicy::Restat);
        assert_eq!(
            serde_json::to_string(&FreshnessPolicy::ScanTime).unwrap(),
            r#""scan_time""#
        );
    }
}
