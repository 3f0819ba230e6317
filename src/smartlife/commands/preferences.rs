use crate::error::Result;
use crate::model::{Preferences, PreferencesPatch, StoreKey};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::debug;
use serde_json::Value;

/// The stored preferences merged over the store's defaults.
pub fn get<B: StorageBackend>(store: &RecordStore<B>) -> Preferences {
    let stored: Value = store.read(StoreKey::Preferences, Value::Null);
    Preferences::merged_over(store.default_preferences(), &stored)
}

/// Overwrites the stored preferences wholesale.
pub fn save<B: StorageBackend>(store: &RecordStore<B>, prefs: &Preferences) -> Result<()> {
    store.write(StoreKey::Preferences, prefs)?;
    debug!("preferences saved");
    Ok(())
}

/// Applies `patch` to the current preferences and saves the result.
pub fn update<B: StorageBackend>(
    store: &RecordStore<B>,
    patch: PreferencesPatch,
) -> Result<Preferences> {
    let mut prefs = get(store);
    prefs.apply(patch);
    save(store, &prefs)?;
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn first_run_returns_defaults() {
        let store = RecordStore::with_backend(MemBackend::new());
        let prefs = get(&store);
        assert_eq!(prefs.user_name, "Jimitry");
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.notifications);
    }

    #[test]
    fn partial_stored_record_is_completed_from_defaults() {
        let store = RecordStore::with_backend(MemBackend::new());
        store
            .backend()
            .set_item("mysmartlife_preferences", r#"{"userName":"Alex"}"#)
            .unwrap();

        let prefs = get(&store);
        assert_eq!(
            prefs,
            Preferences {
                user_name: "Alex".into(),
                theme: Theme::Light,
                notifications: true,
            }
        );
    }

    #[test]
    fn configured_defaults_are_used() {
        let defaults = Preferences {
            user_name: "Robin".into(),
            theme: Theme::Dark,
            notifications: false,
        };
        let store =
            RecordStore::with_backend(MemBackend::new()).with_default_preferences(defaults.clone());
        assert_eq!(get(&store), defaults);
    }

    #[test]
    fn save_overwrites_and_get_reads_back() {
        let store = RecordStore::with_backend(MemBackend::new());
        let prefs = Preferences {
            user_name: "Alex".into(),
            theme: Theme::Dark,
            notifications: false,
        };
        save(&store, &prefs).unwrap();
        assert_eq!(get(&store), prefs);
    }

    #[test]
    fn update_changes_only_patched_fields() {
        let store = RecordStore::with_backend(MemBackend::new());
        let prefs = update(
            &store,
            PreferencesPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(prefs.user_name, "Jimitry");
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(get(&store), prefs);
    }

    #[test]
    fn save_failure_is_reported() {
        let store = RecordStore::with_backend(MemBackend::new());
        store.backend().set_simulate_write_error(true);
        assert!(save(&store, &Preferences::default()).is_err());
    }
}
