//! Cache-busting for the host's script cache

pub mod freshness;

pub use freshness::{FreshnessPolicy, modified_millis};
