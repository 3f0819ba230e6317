use crate::error::{Result, StoreError};
use crate::model::{now, Record, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Read-modify-write of a single record: applies `change`, stamps
/// `updatedAt` and writes the whole collection back.
///
/// An unknown id fails with `NotFound` before anything is written.
pub fn modify_record<B, R, F>(store: &RecordStore<B>, id: RecordId, change: F) -> Result<R>
where
    B: StorageBackend,
    R: Record,
    F: FnOnce(&mut R),
{
    let mut records = store.load_collection::<R>();
    let record = records
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or(StoreError::NotFound { kind: R::KIND, id })?;

    change(record);
    record.touch(now());
    let updated = record.clone();

    store.save_collection(&records)?;
    Ok(updated)
}
