use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::debug;

/// Removes the record with `id` and returns it.
///
/// No match is still a success (`Ok(None)`); the collection is written back
/// either way.
pub fn run<B: StorageBackend, R: Record>(store: &RecordStore<B>, id: RecordId) -> Result<Option<R>> {
    let mut records = store.load_collection::<R>();
    let removed = records.iter().find(|r| r.id() == id).cloned();
    records.retain(|r| r.id() != id);
    store.save_collection(&records)?;

    if removed.is_some() {
        debug!("{} {} deleted", R::KIND, id);
    }
    Ok(removed)
}
