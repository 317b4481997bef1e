use super::{DirEntry, EntryKind, StorageBackend};
use crate::error::{AdlError, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Dir,
}

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since adl is single-threaded.
/// The empty path is the root and always exists as a directory.
#[derive(Default)]
pub struct MemBackend {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

fn not_found(path: &Path) -> AdlError {
    AdlError::Io(IoError::new(
        ErrorKind::NotFound,
        format!("{}: not found", path.display()),
    ))
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of mutating calls (write, create_dir_all, remove_all) that succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// All file paths currently stored, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || matches!(self.nodes.borrow().get(path), Some(Node::Dir))
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(AdlError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn parent_of(path: &Path) -> &Path {
        path.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl StorageBackend for MemBackend {
    fn kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        if path.as_os_str().is_empty() {
            return Ok(Some(EntryKind::Dir));
        }
        Ok(self.nodes.borrow().get(path).map(|node| match node {
            Node::File(_) => EntryKind::File,
            Node::Dir => EntryKind::Dir,
        }))
    }

    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(content)) => Ok(Some(content.clone())),
            Some(Node::Dir) => Err(AdlError::Io(IoError::new(
                ErrorKind::Other,
                format!("{}: is a directory", path.display()),
            ))),
            None => Ok(None),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.check_writable()?;
        if !self.is_dir(Self::parent_of(path)) {
            return Err(not_found(Self::parent_of(path)));
        }
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(AdlError::Io(IoError::new(
                ErrorKind::Other,
                format!("{}: is a directory", path.display()),
            )));
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_string()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.check_writable()?;
        let mut nodes = self.nodes.borrow_mut();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            match nodes.get(&current) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(AdlError::Io(IoError::new(
                        ErrorKind::AlreadyExists,
                        format!("{}: file exists", current.display()),
                    )));
                }
                None => {
                    nodes.insert(current.clone(), Node::Dir);
                }
            }
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !self.is_dir(path) {
            return Err(not_found(path));
        }
        let nodes = self.nodes.borrow();
        let entries = nodes
            .iter()
            .filter(|(child, _)| Self::parent_of(child) == path)
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::File(_) => EntryKind::File,
                    Node::Dir => EntryKind::Dir,
                };
                Some(DirEntry { name, kind })
            })
            .collect();
        Ok(entries)
    }

    fn remove_all(&self, path: &Path) -> Result<()> {
        self.check_writable()?;
        let mut nodes = self.nodes.borrow_mut();
        if !nodes.contains_key(path) {
            return Err(not_found(path));
        }
        nodes.retain(|key, _| !key.starts_with(path));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let backend = MemBackend::new();
        let err = backend.write(Path::new("adr/README.md"), "x").unwrap_err();
        assert!(matches!(err, AdlError::Io(ref e) if e.kind() == ErrorKind::NotFound));

        backend.create_dir_all(Path::new("adr")).unwrap();
        backend.write(Path::new("adr/README.md"), "x").unwrap();
        assert_eq!(
            backend.read_to_string(Path::new("adr/README.md")).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn create_dir_all_is_idempotent_and_builds_parents() {
        let backend = MemBackend::new();
        backend.create_dir_all(Path::new("adr/assets")).unwrap();
        backend.create_dir_all(Path::new("adr/assets")).unwrap();

        assert_eq!(backend.kind(Path::new("adr")).unwrap(), Some(EntryKind::Dir));
        assert_eq!(
            backend.kind(Path::new("adr/assets")).unwrap(),
            Some(EntryKind::Dir)
        );
    }

    #[test]
    fn create_dir_all_refuses_to_replace_a_file() {
        let backend = MemBackend::new();
        backend.write(Path::new("adr"), "stray").unwrap();
        assert!(backend.create_dir_all(Path::new("adr/assets")).is_err());
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let backend = MemBackend::new();
        backend.create_dir_all(Path::new("adr/templates")).unwrap();
        backend.write(Path::new("adr/a.md"), "").unwrap();
        backend
            .write(Path::new("adr/templates/README.md"), "")
            .unwrap();

        let mut names: Vec<_> = backend
            .list_dir(Path::new("adr"))
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.kind))
            .collect();
        names.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            names,
            vec![
                ("a.md".to_string(), EntryKind::File),
                ("templates".to_string(), EntryKind::Dir),
            ]
        );
    }

    #[test]
    fn remove_all_drops_the_whole_subtree() {
        let backend = MemBackend::new();
        backend.create_dir_all(Path::new("adr/assets")).unwrap();
        backend.write(Path::new("adr/assets/.gitkeep"), "").unwrap();
        backend.create_dir_all(Path::new("adrx")).unwrap();

        backend.remove_all(Path::new("adr")).unwrap();
        assert_eq!(backend.kind(Path::new("adr")).unwrap(), None);
        assert!(backend.files().is_empty());
        // Sibling with a shared name prefix survives
        assert_eq!(backend.kind(Path::new("adrx")).unwrap(), Some(EntryKind::Dir));
    }

    #[test]
    fn simulated_write_error_blocks_mutation() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.create_dir_all(Path::new("adr")).is_err());
        assert_eq!(backend.write_count(), 0);
    }
}
