use crate::error::{AdlError, Result};
use crate::layout::AdrPaths;
use crate::store::{EntryKind, StorageBackend};
use log::debug;

/// What currently occupies the managed directory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// Nothing there yet. The normal state before `init`.
    Absent,
    /// A directory; adl owns it.
    Managed,
    /// Something that is not a directory sits at the path.
    Conflict,
}

/// Read-only probe of the managed directory path. I/O failures other than
/// "not found" come back as `Err`.
pub fn probe<B: StorageBackend>(backend: &B, paths: &AdrPaths) -> Result<DirState> {
    let state = match backend.kind(paths.root())? {
        None => DirState::Absent,
        Some(EntryKind::Dir) => DirState::Managed,
        Some(EntryKind::File) => DirState::Conflict,
    };
    debug!("{} is {:?}", paths.root().display(), state);
    Ok(state)
}

/// Guard for commands that need an initialized directory. Never writes.
pub fn require_managed<B: StorageBackend>(backend: &B, paths: &AdrPaths) -> Result<()> {
    match probe(backend, paths)? {
        DirState::Managed => Ok(()),
        DirState::Absent => Err(AdlError::NotManaged(paths.root().to_path_buf())),
        DirState::Conflict => Err(AdlError::Conflict(paths.root().to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::path::Path;

    #[test]
    fn absent_when_nothing_exists() {
        let backend = MemBackend::new();
        let paths = AdrPaths::default();
        assert_eq!(probe(&backend, &paths).unwrap(), DirState::Absent);
        assert!(matches!(
            require_managed(&backend, &paths),
            Err(AdlError::NotManaged(_))
        ));
    }

    #[test]
    fn managed_when_directory_exists() {
        let backend = MemBackend::new();
        backend.create_dir_all(Path::new("adr")).unwrap();
        let paths = AdrPaths::default();
        assert_eq!(probe(&backend, &paths).unwrap(), DirState::Managed);
        assert!(require_managed(&backend, &paths).is_ok());
    }

    #[test]
    fn conflict_when_a_file_sits_at_the_path() {
        let backend = MemBackend::new();
        backend.write(Path::new("adr"), "not a dir").unwrap();
        let paths = AdrPaths::default();
        assert_eq!(probe(&backend, &paths).unwrap(), DirState::Conflict);
        assert!(matches!(
            require_managed(&backend, &paths),
            Err(AdlError::Conflict(_))
        ));
    }

    #[test]
    fn guard_performs_no_writes() {
        let backend = MemBackend::new();
        let _ = require_managed(&backend, &AdrPaths::default());
        assert_eq!(backend.write_count(), 0);
    }
}
