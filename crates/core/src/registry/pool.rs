//! Process-wide registry sharing
//!
//! Sessions of the same window group share one [`Registry`]. The pool is
//! created once per process and handed to every session; it scans lazily on
//! the first acquire of a group and drops the registry when the last lease
//! of that group is released.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Registry;
use crate::interfaces::UnitSource;

/// Identifies the top-level window group a session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A session's hold on a shared registry
#[derive(Debug)]
pub struct RegistryLease {
    key: SessionKey,
    registry: Arc<Registry>,
    owner: bool,
}

impl RegistryLease {
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// True for the lease whose acquire performed the scan
    pub fn is_owner(&self) -> bool {
        self.owner
    }
}

struct PoolEntry {
    registry: Arc<Registry>,
    holders: usize,
}

pub struct RegistryPool {
    source: Arc<dyn UnitSource>,
    entries: Mutex<HashMap<SessionKey, PoolEntry>>,
}

impl fmt::Debug for RegistryPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.lock();
        f.debug_struct("RegistryPool")
            .field(
                "groups",
                &entries
                    .iter()
                    .map(|(key, entry)| (key.as_str(), entry.holders))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RegistryPool {
    pub fn new(source: Arc<dyn UnitSource>) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Share the group's registry, scanning only if the group has none yet
    pub fn acquire(&self, key: &SessionKey) -> RegistryLease {
        let mut entries = self.lock();

        if let Some(entry) = entries.get_mut(key) {
            entry.holders += 1;
            tracing::debug!(
                "Reusing registry for group '{}' ({} holders)",
                key,
                entry.holders
            );
            return RegistryLease {
                key: key.clone(),
                registry: Arc::clone(&entry.registry),
                owner: false,
            };
        }

        tracing::debug!("Building registry for group '{}'", key);
        let registry = Arc::new(Registry::from_report(self.source.scan()));
        entries.insert(
            key.clone(),
            PoolEntry {
                registry: Arc::clone(&registry),
                holders: 1,
            },
        );

        RegistryLease {
            key: key.clone(),
            registry,
            owner: true,
        }
    }

    /// Give a lease back; the group's registry is dropped with its last lease
    pub fn release(&self, lease: RegistryLease) {
        let mut entries = self.lock();

        let Some(entry) = entries.get_mut(&lease.key) else {
            return;
        };
        // A lease from a previous generation of this group no longer counts
        if !Arc::ptr_eq(&entry.registry, &lease.registry) {
            return;
        }

        entry.holders -= 1;
        if entry.holders == 0 {
            tracing::debug!("Dropping registry for group '{}'", lease.key);
            entries.remove(&lease.key);
        }
    }

    /// Number of live leases for a group
    pub fn holders(&self, key: &SessionKey) -> usize {
        self.lock().get(key).map_or(0, |entry| entry.holders)
    }

    pub fn contains(&self, key: &SessionKey) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionKey, PoolEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
