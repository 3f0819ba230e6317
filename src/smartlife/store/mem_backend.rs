use super::backend::StorageBackend;
use crate::error::{Result, StoreError};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<BTreeMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write and removal fail, as a full or disabled storage would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StoreError::Unavailable("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let backend = MemBackend::new();
        assert_eq!(backend.get_item("tasks").unwrap(), None);

        backend.set_item("tasks", "[]").unwrap();
        assert_eq!(backend.get_item("tasks").unwrap(), Some("[]".to_string()));
        assert_eq!(backend.keys().unwrap(), vec!["tasks".to_string()]);

        backend.remove_item("tasks").unwrap();
        assert_eq!(backend.get_item("tasks").unwrap(), None);
        backend.remove_item("tasks").unwrap();
    }

    #[test]
    fn simulated_write_error_keeps_old_value() {
        let backend = MemBackend::new();
        backend.set_item("notes", "[1]").unwrap();
        backend.set_simulate_write_error(true);

        assert!(matches!(
            backend.set_item("notes", "[2]"),
            Err(StoreError::Unavailable(_))
        ));
        assert!(backend.remove_item("notes").is_err());
        assert_eq!(backend.get_item("notes").unwrap(), Some("[1]".to_string()));
    }
}
