use crate::error::Result;

/// Abstract interface for the raw key-value substrate.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::RecordStore`] handles the "what" (serialization, defaults,
/// fault tolerance). Values are opaque strings; keys are plain names
/// without path separators.
///
/// All methods take `&self`: backends that keep state use interior
/// mutability, since the store is single-threaded.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be all-or-nothing: a failed write leaves the old value intact.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a key that does not exist is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// List every key currently stored.
    fn keys(&self) -> Result<Vec<String>>;
}
