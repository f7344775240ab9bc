use std::io;

/// Errors that can occur during uc-loader operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Pattern error: {0}")]
    PatternError(String),

    #[error("Scan error: {0}")]
    ScanError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for uc-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a session refused to start
///
/// A gated session behaves as if the loader were absent for its document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateFailure {
    #[error("Host version does not satisfy {required}")]
    HostVersion { required: String },

    #[error("Document {url} is block-listed")]
    Blocked { url: String },
}
