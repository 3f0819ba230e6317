//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every consumer (the bundled CLI, tests, or any other UI).
//!
//! It pins the generic commands to concrete record types, so callers get
//! `add_task`, `toggle_task`, `events()` and so on instead of turbofish
//! calls. It performs no I/O of its own beyond what the store does and
//! returns data, never formatted strings.
//!
//! ## Result conventions
//!
//! - Listing never fails: an absent or unreadable collection is empty.
//! - `add_*`, `update_*`, `toggle_task` return the stored record, or an
//!   error when nothing was persisted (unknown id, storage failure).
//! - `delete_*` succeeds even when the id matched nothing and hands back the
//!   removed record, if any.
//! - `preferences()` always returns a complete record.
//!
//! Callers re-fetch after mutations; the store pushes no notifications.

use crate::commands::{self, init::SeedReport, DataPaths};
use crate::config::SmartlifeConfig;
use crate::error::Result;
use crate::ids::IdSource;
use crate::model::{
    Event, EventPatch, Note, NotePatch, Preferences, PreferencesPatch, RecordId, Task, TaskPatch,
};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use log::info;

/// The main API facade for organizer operations.
///
/// Generic over `StorageBackend` to allow different storage backends.
pub struct OrganizerApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl OrganizerApi<FsBackend> {
    /// File-backed API rooted at `paths`, configured by `config`.
    ///
    /// Seeds the example records when `config.seed_on_open` is set and the
    /// storage directory does not exist yet. A directory that has been
    /// emptied (by deletes or `clear_all`) stays empty.
    pub fn open(paths: &DataPaths, config: &SmartlifeConfig) -> Self {
        let first_run = !paths.storage_dir().exists();
        let store = RecordStore::with_backend(FsBackend::new(paths.storage_dir()))
            .with_keys(config.storage_keys())
            .with_default_preferences(config.default_preferences.clone());
        let api = Self::new(store);
        if config.seed_on_open && first_run {
            api.initialize_defaults();
        }
        info!("opened store at {}", paths.storage_dir().display());
        api
    }
}

impl<B: StorageBackend> OrganizerApi<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self { store }
    }

    /// Shorthand for an API over `backend` with default keys and ids.
    pub fn with_backend(backend: B) -> Self {
        Self::new(RecordStore::with_backend(backend))
    }

    pub fn with_id_source(self, ids: impl IdSource + 'static) -> Self {
        Self::new(self.store.with_id_source(ids))
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    // --- Events ---

    pub fn events(&self) -> Vec<Event> {
        commands::list::run(&self.store)
    }

    pub fn event(&self, id: RecordId) -> Option<Event> {
        commands::list::find(&self.store, id)
    }

    pub fn add_event(&self, patch: EventPatch) -> Result<Event> {
        commands::create::run(&self.store, patch)
    }

    pub fn update_event(&self, id: RecordId, patch: EventPatch) -> Result<Event> {
        commands::update::run(&self.store, id, patch)
    }

    pub fn delete_event(&self, id: RecordId) -> Result<Option<Event>> {
        commands::delete::run(&self.store, id)
    }

    // --- Tasks ---

    pub fn tasks(&self) -> Vec<Task> {
        commands::list::run(&self.store)
    }

    pub fn task(&self, id: RecordId) -> Option<Task> {
        commands::list::find(&self.store, id)
    }

    pub fn add_task(&self, patch: TaskPatch) -> Result<Task> {
        commands::create::run(&self.store, patch)
    }

    pub fn update_task(&self, id: RecordId, patch: TaskPatch) -> Result<Task> {
        commands::update::run(&self.store, id, patch)
    }

    pub fn toggle_task(&self, id: RecordId) -> Result<Task> {
        commands::toggle::run(&self.store, id)
    }

    pub fn delete_task(&self, id: RecordId) -> Result<Option<Task>> {
        commands::delete::run(&self.store, id)
    }

    // --- Notes ---

    pub fn notes(&self) -> Vec<Note> {
        commands::list::run(&self.store)
    }

    pub fn note(&self, id: RecordId) -> Option<Note> {
        commands::list::find(&self.store, id)
    }

    pub fn add_note(&self, patch: NotePatch) -> Result<Note> {
        commands::create::run(&self.store, patch)
    }

    pub fn update_note(&self, id: RecordId, patch: NotePatch) -> Result<Note> {
        commands::update::run(&self.store, id, patch)
    }

    pub fn delete_note(&self, id: RecordId) -> Result<Option<Note>> {
        commands::delete::run(&self.store, id)
    }

    // --- Preferences ---

    pub fn preferences(&self) -> Preferences {
        commands::preferences::get(&self.store)
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        commands::preferences::save(&self.store, prefs)
    }

    pub fn update_preferences(&self, patch: PreferencesPatch) -> Result<Preferences> {
        commands::preferences::update(&self.store, patch)
    }

    // --- Whole store ---

    pub fn initialize_defaults(&self) -> SeedReport {
        commands::init::run(&self.store)
    }

    pub fn clear_all(&self) -> Result<()> {
        commands::clear::run(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::model::{EventKind, Theme};
    use crate::store::mem_backend::MemBackend;

    fn api() -> OrganizerApi<MemBackend> {
        OrganizerApi::with_backend(MemBackend::new()).with_id_source(SequentialIds::new())
    }

    #[test]
    fn task_walkthrough() {
        let api = api();

        let milk = api.add_task(TaskPatch::text("Buy milk")).unwrap();
        let tasks = api.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
        assert!(tasks[0].updated_at.is_none());

        let toggled = api.toggle_task(milk.id).unwrap();
        assert!(toggled.completed);
        assert!(toggled.updated_at.is_some());

        let bank = api.add_task(TaskPatch::text("Call bank")).unwrap();
        let texts: Vec<_> = api.tasks().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["Buy milk", "Call bank"]);

        api.delete_task(milk.id).unwrap();
        assert_eq!(api.tasks(), vec![bank]);
    }

    #[test]
    fn each_collection_is_independent() {
        let api = api();
        let event = api
            .add_event(EventPatch::new("Standup", "9h30", EventKind::Reminder))
            .unwrap();
        let note = api.add_note(NotePatch::new("Groceries", "eggs")).unwrap();

        assert_eq!(api.events(), vec![event.clone()]);
        assert_eq!(api.notes(), vec![note.clone()]);
        assert!(api.tasks().is_empty());
        assert_eq!(api.event(event.id), Some(event));
        assert_eq!(api.note(note.id), Some(note));
    }

    #[test]
    fn update_event_with_unknown_id_leaves_events_unchanged() {
        let api = api();
        api.add_event(EventPatch::new("A", "9h", EventKind::Course))
            .unwrap();
        let before = api.events();

        assert!(api.update_event(404, EventPatch::default()).is_err());
        assert_eq!(api.events(), before);
    }

    #[test]
    fn update_note_and_task() {
        let api = api();
        let note = api.add_note(NotePatch::new("T", "C")).unwrap();
        let task = api.add_task(TaskPatch::text("x")).unwrap();

        let note = api
            .update_note(
                note.id,
                NotePatch {
                    title: Some("T2".into()),
                    content: None,
                },
            )
            .unwrap();
        let task = api.update_task(task.id, TaskPatch::text("y")).unwrap();

        assert_eq!(api.note(note.id).unwrap().title, "T2");
        assert_eq!(api.task(task.id).unwrap().text, "y");
        assert!(api.delete_event(12345).unwrap().is_none());
        assert!(api.delete_note(note.id).unwrap().is_some());
    }

    #[test]
    fn preferences_roundtrip() {
        let api = api();
        assert_eq!(api.preferences(), Preferences::default());

        let prefs = api
            .update_preferences(PreferencesPatch {
                user_name: Some("Alex".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(prefs.user_name, "Alex");
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.notifications);
        assert_eq!(api.preferences(), prefs);

        let dark = Preferences {
            theme: Theme::Dark,
            ..prefs
        };
        api.save_preferences(&dark).unwrap();
        assert_eq!(api.preferences(), dark);
    }

    #[test]
    fn initialize_then_clear() {
        let api = api();
        let report = api.initialize_defaults();
        assert_eq!(report.seeded.len(), 3);
        assert!(api.initialize_defaults().is_noop());

        api.clear_all().unwrap();
        assert!(api.events().is_empty());
        assert!(api.tasks().is_empty());
        assert!(api.notes().is_empty());
        assert_eq!(api.preferences(), Preferences::default());
    }

    #[test]
    fn new_ids_do_not_collide_with_seeded_ones() {
        let api = OrganizerApi::with_backend(MemBackend::new());
        api.initialize_defaults();
        let task = api.add_task(TaskPatch::text("Mine")).unwrap();
        assert!(api.tasks().iter().filter(|t| t.id == task.id).count() == 1);
    }
}
