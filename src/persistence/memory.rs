use std::collections::HashMap;

use super::SlotStore;
use crate::errors::{AppError, AppResult};

/// Slot store kept in process memory. Can be switched to read-only to
/// exercise write failures.
#[derive(Debug, Default, Clone)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
    read_only: bool,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::PersistenceWriteFailed(format!(
                "slot '{}' is read-only",
                key
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
