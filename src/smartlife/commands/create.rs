use crate::error::Result;
use crate::model::{now, Record};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::debug;

pub fn run<B: StorageBackend, R: Record>(store: &RecordStore<B>, patch: R::Patch) -> Result<R> {
    let mut records = store.load_collection::<R>();
    let record = R::create(store.next_id(&records)?, now(), patch);
    records.push(record.clone());
    store.save_collection(&records)?;

    debug!("{} {} added", R::KIND, record.id());
    Ok(record)
}
