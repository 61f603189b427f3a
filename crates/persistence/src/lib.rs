//! `stockpile-persistence` — snapshot persistence for the state engine.
//!
//! The engine treats its backing store as an abstract single-record byte
//! store ([`SnapshotBackend`]); this crate provides the JSON codec, the
//! in-memory and file-backed backends, and the best-effort adapter
//! ([`SnapshotStore`]) the engine's `Store` plugs into.
//!
//! Persistence is best-effort throughout: a missing or malformed record loads
//! as nothing (the engine falls back to its seed dataset), and a failed save
//! is logged and swallowed — the in-memory snapshot stays authoritative for
//! the rest of the session.

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod snapshot;

pub use backend::SnapshotBackend;
pub use error::SnapshotError;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use snapshot::SnapshotStore;
