use crate::error::Result;
use crate::model::{RecordId, Task};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;
use log::debug;

use super::helpers::modify_record;

/// Flips `completed` on a task.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: RecordId) -> Result<Task> {
    let task = modify_record(store, id, |t: &mut Task| t.completed = !t.completed)?;
    debug!("Task {} completed={}", id, task.completed);
    Ok(task)
}
