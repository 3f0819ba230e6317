//! # Storage Layer
//!
//! Two levels live here:
//!
//! - [`backend::StorageBackend`]: a raw string key-value substrate. Knows
//!   nothing about records, only `get_item` / `set_item` / `remove_item`.
//! - [`RecordStore`]: the fault-tolerant layer on top. It serializes whole
//!   collections to JSON, reads them back with a caller-supplied default,
//!   and assigns identifiers to new records.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one JSON file per key.
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, with write
//!   failure simulation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/storage/
//! ├── mysmartlife_events.json       # JSON array of events
//! ├── mysmartlife_tasks.json        # JSON array of tasks
//! ├── mysmartlife_notes.json        # JSON array of notes
//! └── mysmartlife_preferences.json  # single preferences object
//! ```
//!
//! The `mysmartlife` prefix comes from [`StorageKeys`] and is configurable.
//! There is no version field: a change to the record shapes is a breaking
//! change of the format.
//!
//! ## Concurrency
//!
//! Every mutation is a read-modify-write of a whole collection with no
//! locking. The types here are not `Sync` and a data directory must have a
//! single writer at a time.

use crate::model::StoreKey;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use record_store::RecordStore;

pub const DEFAULT_KEY_PREFIX: &str = "mysmartlife";

/// Whether `key` can name a stored item: non-empty, no leading `.`, and only
/// ASCII alphanumerics, `_`, `-` or `.`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Maps logical [`StoreKey`]s to physical key names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }
}

impl StorageKeys {
    /// An empty prefix yields the bare names (`events`, `tasks`, ...).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolve(&self, key: StoreKey) -> String {
        if self.prefix.is_empty() {
            key.name().to_string()
        } else {
            format!("{}_{}", self.prefix, key.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_namespaced() {
        let keys = StorageKeys::default();
        assert_eq!(keys.resolve(StoreKey::Events), "mysmartlife_events");
        assert_eq!(keys.resolve(StoreKey::Preferences), "mysmartlife_preferences");
    }

    #[test]
    fn key_validity() {
        assert!(is_valid_key("mysmartlife_tasks"));
        assert!(is_valid_key("work-2024.v1"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key(".hidden"));
        assert!(!is_valid_key("my prefix"));
        assert!(!is_valid_key("a/b"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let keys = StorageKeys::with_prefix("");
        let names: Vec<_> = StoreKey::ALL.iter().map(|k| keys.resolve(*k)).collect();
        assert_eq!(names, ["events", "tasks", "notes", "preferences"]);
    }
}
