use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::backend::SnapshotBackend;
use crate::error::SnapshotError;

/// File-backed single-record store.
///
/// The record lives in one file, created (along with its parent directories)
/// on first save. A missing file is an empty store, not an error.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self) -> Result<Option<Vec<u8>>, SnapshotError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, bytes: &[u8]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("stockpile-test-{}", uuid::Uuid::now_v7()))
            .join("snapshot.json")
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let backend = FileBackend::new(scratch_path());
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let path = scratch_path();
        let backend = FileBackend::new(&path);

        backend.save(b"{\"products\":[]}").unwrap();
        assert_eq!(backend.load().unwrap().unwrap(), b"{\"products\":[]}");

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
