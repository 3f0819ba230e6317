//! First-run bootstrap: fills empty collections with example records.

use crate::model::{Event, EventKind, Note, Record, StoreKey, Task};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use log::info;

/// Which collections a bootstrap run touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<StoreKey>,
    pub failed: Vec<StoreKey>,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        self.seeded.is_empty() && self.failed.is_empty()
    }
}

/// Seeds every collection that currently holds zero records.
///
/// A collection with at least one record is left alone, so running this
/// again is a no-op. Each collection is decided on its own.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> SeedReport {
    let at = crate::model::now();
    let mut report = SeedReport::default();

    seed_if_empty(store, default_events(at), &mut report);
    seed_if_empty(store, default_tasks(at), &mut report);
    seed_if_empty(store, default_notes(at), &mut report);

    if !report.seeded.is_empty() {
        info!(
            "seeded default records for {}",
            report
                .seeded
                .iter()
                .map(StoreKey::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    report
}

fn seed_if_empty<B: StorageBackend, R: Record>(
    store: &RecordStore<B>,
    defaults: Vec<R>,
    report: &mut SeedReport,
) {
    if !store.load_collection::<R>().is_empty() {
        return;
    }
    match store.save_collection(&defaults) {
        Ok(()) => report.seeded.push(R::KEY),
        Err(_) => report.failed.push(R::KEY),
    }
}

pub fn default_events(at: DateTime<Utc>) -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "English class".to_string(),
            time: "10h".to_string(),
            kind: EventKind::Course,
            created_at: at,
            updated_at: None,
        },
        Event {
            id: 2,
            title: "Reminder: drink some water".to_string(),
            time: "14h".to_string(),
            kind: EventKind::Reminder,
            created_at: at,
            updated_at: None,
        },
    ]
}

pub fn default_tasks(at: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Review the React project".to_string(),
            completed: false,
            created_at: at,
            updated_at: None,
        },
        Task {
            id: 2,
            text: "Pay the internet bill".to_string(),
            completed: true,
            created_at: at,
            updated_at: None,
        },
    ]
}

pub fn default_notes(at: DateTime<Utc>) -> Vec<Note> {
    vec![Note {
        id: 1,
        title: "Idea for a motivation app".to_string(),
        content: "Build an app that helps people stay motivated with their daily goals..."
            .to_string(),
        created_at: at,
        updated_at: None,
    }]
}
