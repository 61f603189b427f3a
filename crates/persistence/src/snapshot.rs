//! Best-effort snapshot adapter: JSON codec plus the swallow-and-log policy.

use anyhow::Context;

use stockpile_core::InventoryState;
use stockpile_engine::StatePersistence;

use crate::backend::SnapshotBackend;
use crate::error::SnapshotError;

/// Serializes snapshots through a [`SnapshotBackend`].
///
/// Both directions degrade instead of failing: a missing or malformed record
/// loads as `None` (the caller falls back to the seed dataset), and a failed
/// save leaves the in-memory snapshot authoritative for the rest of the
/// session. Failures land on the tracing channel, never on the caller.
#[derive(Debug)]
pub struct SnapshotStore<B> {
    backend: B,
}

impl<B: SnapshotBackend> SnapshotStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Decode the last persisted snapshot, if one exists and parses.
    pub fn load(&self) -> Option<InventoryState> {
        let bytes = match self.backend.load() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                let err = anyhow::Error::new(err).context("failed to read persisted snapshot");
                tracing::warn!("{err:?}; falling back to seed dataset");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(state) => Some(state),
            Err(err) => {
                let err = anyhow::Error::new(SnapshotError::Deserialize(err))
                    .context("persisted snapshot is malformed");
                tracing::warn!("{err:?}; falling back to seed dataset");
                None
            }
        }
    }

    /// Serialize and write the snapshot; failures are logged and swallowed.
    pub fn save(&self, state: &InventoryState) {
        let result = serde_json::to_vec(state)
            .map_err(SnapshotError::Serialize)
            .and_then(|bytes| self.backend.save(&bytes));

        if let Err(err) = result {
            let err = anyhow::Error::new(err).context("failed to persist snapshot");
            tracing::error!("{err:?}; in-memory state remains authoritative");
        }
    }
}

impl<B: SnapshotBackend> StatePersistence for SnapshotStore<B> {
    fn load(&self) -> Option<InventoryState> {
        SnapshotStore::load(self)
    }

    fn save(&self, state: &InventoryState) {
        SnapshotStore::save(self, state);
    }
}
