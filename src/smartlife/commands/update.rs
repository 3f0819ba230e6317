use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::debug;

use super::helpers::modify_record;

pub fn run<B: StorageBackend, R: Record>(
    store: &RecordStore<B>,
    id: RecordId,
    patch: R::Patch,
) -> Result<R> {
    let record = modify_record(store, id, |r: &mut R| r.apply(patch))?;
    debug!("{} {} updated", R::KIND, id);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::error::StoreError;
    use crate::model::{Note, NotePatch};
    use crate::store::mem_backend::MemBackend;

    fn store_with_note() -> (RecordStore<MemBackend>, Note) {
        let store = RecordStore::with_backend(MemBackend::new());
        let note = create::run(&store, NotePatch::new("Title", "Old")).unwrap();
        (store, note)
    }

    #[test]
    fn merges_patch_and_stamps_updated_at() {
        let (store, note) = store_with_note();
        let patch = NotePatch {
            content: Some("New".into()),
            ..Default::default()
        };
        let updated: Note = run(&store, note.id, patch).unwrap();

        assert_eq!(updated.title, "Title");
        assert_eq!(updated.content, "New");
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at.is_some());
        assert_eq!(list::run::<_, Note>(&store), vec![updated]);
    }

    #[test]
    fn unknown_id_leaves_storage_untouched() {
        let (store, note) = store_with_note();
        let before = store.backend().get_item("mysmartlife_notes").unwrap();

        let result = run::<_, Note>(&store, note.id + 1, NotePatch::new("x", "y"));
        assert!(matches!(result, Err(StoreError::NotFound { kind: "Note", .. })));

        let after = store.backend().get_item("mysmartlife_notes").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn failed_write_keeps_previous_version() {
        let (store, note) = store_with_note();
        store.backend().set_simulate_write_error(true);

        assert!(run::<_, Note>(&store, note.id, NotePatch::new("x", "y")).is_err());
        assert_eq!(list::run::<_, Note>(&store), vec![note]);
    }
}
