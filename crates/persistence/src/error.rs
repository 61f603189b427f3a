//! Persistence error model.

use thiserror::Error;

/// Failure while loading or saving a snapshot record.
///
/// These never cross the engine boundary: the adapter captures them on its
/// diagnostic channel and degrades (empty load, skipped save).
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The backing medium failed (read, write, or directory creation).
    #[error("backend io failure: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The persisted record could not be parsed into a snapshot.
    #[error("failed to deserialize snapshot: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The backend rejected the operation (e.g. quota exceeded, poisoned lock).
    #[error("backend rejected the operation: {0}")]
    Backend(String),
}

impl SnapshotError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
