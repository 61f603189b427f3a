use std::sync::RwLock;

use crate::backend::SnapshotBackend;
use crate::error::SnapshotError;

/// In-memory single-record store.
///
/// Intended for tests/dev. Lock poisoning is reported as a backend failure;
/// the adapter swallows it like any other.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    record: RwLock<Option<Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, SnapshotError> {
        let record = self
            .record
            .read()
            .map_err(|_| SnapshotError::backend("lock poisoned"))?;
        Ok(record.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let mut record = self
            .record
            .write()
            .map_err(|_| SnapshotError::backend("lock poisoned"))?;
        *record = Some(bytes.to_vec());
        Ok(())
    }
}
