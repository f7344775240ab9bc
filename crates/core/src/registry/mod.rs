//! Scanned units and their sharing between sessions

pub mod pool;
pub mod unit_registry;

pub use pool::{RegistryLease, RegistryPool, SessionKey};
pub use unit_registry::Registry;
