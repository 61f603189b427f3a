//! Abstract byte store the snapshot adapter writes through.

use crate::error::SnapshotError;

/// A key-less byte store holding at most one persisted record.
///
/// This is the whole persistence contract the engine relies on: hand back the
/// last saved bytes if any record exists, or overwrite them. Backends do not
/// interpret the bytes.
pub trait SnapshotBackend {
    /// The last saved record, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>, SnapshotError>;

    /// Overwrite the record.
    fn save(&self, bytes: &[u8]) -> Result<(), SnapshotError>;
}
