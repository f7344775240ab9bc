//! uc-loader - A header-driven script registry and conditional loader
//!
//! This crate provides functionality to:
//! - Scan directory trees for script files and parse their `// ==UserScript==` headers
//! - Share one scanned registry between the sessions of a window group
//! - Match units against documents with wildcard include/exclude rules
//! - Inject executable units directly and batch overlay units into one synthetic document
pub mod cache;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod loader;
pub mod parser;
pub mod patterns;
pub mod registry;
pub mod scanner;
pub mod scheduler;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, GateFailure, Result};
pub use types::*;

// Re-export main API components
pub use cache::FreshnessPolicy;
pub use config::LoaderConfig;
pub use interfaces::{BlockPolicy, Host, UnitSource};
pub use loader::{Loader, OverlayDocument, Selection};
pub use parser::MetadataParser;
pub use patterns::{BlockList, UrlPattern};
pub use registry::{Registry, RegistryLease, RegistryPool, SessionKey};
pub use scanner::{ScanReport, ScanRoot, ScanWarning, Scanner};
pub use scheduler::TaskQueue;
pub use session::{Session, SessionContext, SessionState};
