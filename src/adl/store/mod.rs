//! # Storage Layer
//!
//! Every filesystem touch in adl goes through the [`StorageBackend`] trait. The command
//! layer never calls `std::fs` directly, so the same workflows run against the real disk
//! in production and against an in-memory tree in tests.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend, rooted at a real directory
//!   (the process working directory for the CLI).
//! - [`mem_backend::MemBackend`]: In-memory tree for testing.
//!   - No persistence
//!   - Can simulate write failures and counts writes
//!
//! ## Paths
//!
//! All paths handed to a backend are relative to its root. The layout of the managed
//! directory lives in [`crate::layout`]; backends know nothing about it.

use crate::error::Result;
use std::path::Path;

pub mod fs_backend;
pub mod mem_backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Abstract interface for raw filesystem I/O.
pub trait StorageBackend {
    /// What sits at `path`, or `Ok(None)` if nothing does.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn kind(&self, path: &Path) -> Result<Option<EntryKind>>;

    /// Read a file as text, replacing invalid UTF-8. Returns Ok(None) if the file does not exist.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>>;

    /// Create or truncate the file at `path`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and any missing parents. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Direct regular files and directories of a directory, in no particular order.
    /// Symlinks are skipped.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Remove a file or a whole directory tree.
    fn remove_all(&self, path: &Path) -> Result<()>;
}
