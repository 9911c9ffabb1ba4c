//! In-process record slot.

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::record::{RecordSlot, VersionedStore};

/// Curve store that keeps its record in memory.
pub type MemoryStore = VersionedStore<MemorySlot>;

/// A record slot holding the raw record string.
#[derive(Debug, Default)]
pub struct MemorySlot {
    raw: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Current raw record, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }

    /// Overwrite the raw record, bypassing encoding.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.raw.lock() = Some(raw.into());
    }
}

impl RecordSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.raw())
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        self.set_raw(raw);
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        *self.raw.lock() = None;
        Ok(())
    }
}

impl VersionedStore<MemorySlot> {
    /// Empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemorySlot::default())
    }
}
