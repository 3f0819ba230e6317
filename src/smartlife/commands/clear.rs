use crate::error::Result;
use crate::model::StoreKey;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::info;

/// Removes the three collections and the preferences record.
///
/// Every key is attempted even if an earlier removal fails; the first
/// failure is returned.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<()> {
    let mut first_error = None;
    for key in StoreKey::ALL {
        if let Err(e) = store.remove(key) {
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            info!("all data cleared");
            Ok(())
        }
    }
}
