//! Snapshot owner: the single mutation entry point.

use stockpile_core::InventoryState;

use crate::operation::Operation;
use crate::reducer::reduce;

/// Persistence seam consumed by the store.
///
/// Best-effort by contract: `load` yields nothing when the backing record is
/// absent or malformed, and `save` must never fail the session — failures are
/// captured by the implementation on its diagnostic channel, not surfaced
/// here.
pub trait StatePersistence {
    /// The last persisted snapshot, if one exists and parses.
    fn load(&self) -> Option<InventoryState>;

    /// Serialize and write the snapshot, swallowing failures.
    fn save(&self, state: &InventoryState);
}

/// Holds exactly one snapshot at a time.
///
/// `apply` is the only mutator; all other access is read-only projection
/// through [`Store::current`]. Built for a single logical thread: every
/// operation runs to completion, and the snapshot is replaced atomically by
/// value, never updated in place.
pub struct Store {
    state: InventoryState,
    persistence: Option<Box<dyn StatePersistence>>,
}

impl Store {
    /// Store with no persistence, starting from the given snapshot.
    pub fn new(initial: InventoryState) -> Self {
        Self {
            state: initial,
            persistence: None,
        }
    }

    /// Store backed by a persistence adapter.
    ///
    /// Loads the last saved snapshot; when the adapter has nothing (first
    /// run, or a record that failed to parse) the built-in seed dataset is
    /// used. The loaded snapshot is installed through the reducer's
    /// `LoadState` path, so every state replacement goes through [`reduce`].
    pub fn with_persistence(persistence: Box<dyn StatePersistence>) -> Self {
        let mut store = Self::new(InventoryState::seed());
        if let Some(snapshot) = persistence.load() {
            store.state = reduce(&store.state, Operation::LoadState(snapshot));
        } else {
            tracing::info!("no persisted snapshot; starting from the seed dataset");
        }
        store.persistence = Some(persistence);
        store
    }

    /// The current snapshot (immutable read).
    pub fn current(&self) -> &InventoryState {
        &self.state
    }

    /// Apply one operation: compute the next snapshot, install it as current,
    /// persist it best-effort, and return it.
    pub fn apply(&mut self, operation: Operation) -> &InventoryState {
        tracing::debug!(operation = operation.name(), "applying operation");
        self.state = reduce(&self.state, operation);
        if let Some(persistence) = &self.persistence {
            persistence.save(&self.state);
        }
        &self.state
    }
}
