use super::{DirEntry, EntryKind, StorageBackend};
use crate::error::{AdlError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl StorageBackend for FsBackend {
    fn kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        match fs::metadata(self.resolve(path)) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Dir)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AdlError::Io(e)),
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        // Invalid UTF-8 is replaced rather than rejected
        match fs::read(self.resolve(path)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AdlError::Io(e)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let target = self.resolve(path);
        debug!("Writing {}", target.display());
        fs::write(target, contents).map_err(AdlError::Io)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(self.resolve(path)).map_err(AdlError::Io)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path)).map_err(AdlError::Io)? {
            let entry = entry.map_err(AdlError::Io)?;
            let file_type = entry.file_type().map_err(AdlError::Io)?;
            // Symlinks and other special files are neither, and never listed
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn remove_all(&self, path: &Path) -> Result<()> {
        let target = self.resolve(path);
        debug!("Removing {}", target.display());
        let meta = fs::symlink_metadata(&target).map_err(AdlError::Io)?;
        if meta.is_dir() {
            fs::remove_dir_all(target).map_err(AdlError::Io)
        } else {
            fs::remove_file(target).map_err(AdlError::Io)
        }
    }
}
