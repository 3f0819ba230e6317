use super::backend::StorageBackend;
use super::StorageKeys;
use crate::error::{Result, StoreError};
use crate::ids::{ClockIds, IdSource};
use crate::model::{Preferences, Record, RecordId, StoreKey};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fault-tolerant document store over a [`StorageBackend`].
///
/// Reads never fail: a missing, unreadable or undecodable document yields
/// the default the caller asked for, and the fault is logged. Writes and
/// removals report failure through their `Result` and log it as well.
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    keys: StorageKeys,
    ids: Box<dyn IdSource>,
    default_preferences: Preferences,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            keys: StorageKeys::default(),
            ids: Box::new(ClockIds::new()),
            default_preferences: Preferences::default(),
        }
    }

    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_default_preferences(mut self, defaults: Preferences) -> Self {
        self.default_preferences = defaults;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn default_preferences(&self) -> &Preferences {
        &self.default_preferences
    }

    // --- Primitives ---

    /// Serialize `value` and store it under `key`.
    pub fn write<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<()> {
        let name = self.keys.resolve(key);
        let outcome = serde_json::to_string(value)
            .map_err(StoreError::Serialization)
            .and_then(|raw| self.backend.set_item(&name, &raw));
        if let Err(e) = &outcome {
            warn!("failed to write {}: {}", name, e);
        }
        outcome
    }

    /// Load the document under `key`, or `default` if it is absent or
    /// cannot be decoded.
    pub fn read<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> T {
        let name = self.keys.resolve(key);
        let raw = match self.backend.get_item(&name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("failed to read {}: {}", name, e);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("discarding unreadable {}: {}", name, e);
                default
            }
        }
    }

    /// Delete the document under `key`.
    pub fn remove(&self, key: StoreKey) -> Result<()> {
        let name = self.keys.resolve(key);
        let outcome = self.backend.remove_item(&name);
        if let Err(e) = &outcome {
            warn!("failed to remove {}: {}", name, e);
        }
        outcome
    }

    // --- Collections ---

    pub fn load_collection<R: Record>(&self) -> Vec<R> {
        self.read(R::KEY, Vec::new())
    }

    pub fn save_collection<R: Record>(&self, records: &[R]) -> Result<()> {
        self.write(R::KEY, records)
    }

    /// A fresh id for a record about to join `records`.
    pub fn next_id<R: Record>(&self, records: &[R]) -> Result<RecordId> {
        let floor = match records.iter().map(Record::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        floor
            .and_then(|floor| self.ids.next_id(floor))
            .ok_or_else(|| StoreError::Unavailable(format!("{} id space exhausted", R::KIND)))
    }
}
