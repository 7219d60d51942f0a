//! Ephemeral state store seam
//!
//! The two halves of the flow run at disjoint points in time and only meet
//! through a per-attempt scratch value that survives the full-page redirect
//! round trip. That store is an explicit trait rather than an implicit
//! global so hosting code chooses the backing and tests supply isolated
//! instances.

use std::collections::HashMap;

use parking_lot::Mutex;

/// Trait for the ephemeral key-value store carrying the CSRF state
///
/// Single-writer, single-reader semantics per attempt; the flow uses one
/// fixed key ([`super::STATE_KEY`]). Implementations are expected to be
/// scoped to one session, the way the original browser flow scoped its
/// store to one tab.
pub trait StateStore: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str);

    /// Retrieve the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Remove the value stored under `key`; removing an absent key is a no-op
    fn remove(&self, key: &str);
}

/// In-memory [`StateStore`] for a single process/session
///
/// The mutex exists to make shared handles `Sync`; at most one login attempt
/// is in flight at a time, so there is no contention to speak of.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
