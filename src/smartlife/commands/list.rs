use crate::model::{Record, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// The whole collection in stored order; empty if absent or unreadable.
pub fn run<B: StorageBackend, R: Record>(store: &RecordStore<B>) -> Vec<R> {
    store.load_collection()
}

pub fn find<B: StorageBackend, R: Record>(store: &RecordStore<B>, id: RecordId) -> Option<R> {
    store
        .load_collection::<R>()
        .into_iter()
        .find(|r| r.id() == id)
}
