//! Identifier assignment for new records.
//!
//! Records are identified by integers shaped like creation timestamps
//! (milliseconds since the epoch). A bare clock reading collides when two
//! records are added within the same millisecond, so every source is also
//! told the smallest id that is still free in the target collection and
//! never hands out anything below it or below its own previous answer.

use crate::model::RecordId;
use chrono::Utc;
use std::cell::Cell;

pub trait IdSource {
    /// Returns a fresh id that is `>= floor`, or `None` once ids run out.
    fn next_id(&self, floor: RecordId) -> Option<RecordId>;
}

/// Millisecond-clock ids, bumped past the previous id when the clock has not
/// moved.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: Cell<RecordId>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&self, floor: RecordId) -> Option<RecordId> {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.get().checked_add(1)?).max(floor);
        self.last.set(id);
        Some(id)
    }
}

/// Deterministic counter, handy in tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: Cell<RecordId>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_after(last: RecordId) -> Self {
        Self {
            last: Cell::new(last),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, floor: RecordId) -> Option<RecordId> {
        let id = self.last.get().checked_add(1)?.max(floor);
        self.last.set(id);
        Some(id)
    }
}
