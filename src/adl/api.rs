//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every adl operation, whatever UI sits on top.
//!
//! It dispatches to `commands/*.rs`, supplies the current time, and returns structured
//! `Result<CmdResult>` values. It does no printing and holds no business logic.
//!
//! `AdlApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `AdlApi<FsBackend>`
//! - Testing: `AdlApi<MemBackend>`

use crate::commands;
use crate::error::{AdlError, Result};
use crate::layout::AdrPaths;
use crate::state::{self, DirState};
use crate::store::StorageBackend;
use chrono::Utc;

pub struct AdlApi<B: StorageBackend> {
    backend: B,
    paths: AdrPaths,
}

impl<B: StorageBackend> AdlApi<B> {
    pub fn new(backend: B, paths: AdrPaths) -> Self {
        Self { backend, paths }
    }

    /// Initialize (or, after `confirm` agrees, reinitialize) the managed directory.
    pub fn init<C>(&self, confirm: C) -> Result<commands::CmdResult>
    where
        C: FnOnce() -> Result<bool>,
    {
        commands::init::run(&self.backend, &self.paths, Utc::now(), confirm)
    }

    /// Create the next record from name tokens, joined with single spaces.
    ///
    /// At least one token is required. Its content is not checked, so a blank title
    /// still yields a record.
    pub fn create<I: AsRef<str>>(&self, name: &[I]) -> Result<commands::CmdResult> {
        if name.is_empty() {
            return Err(AdlError::MissingName);
        }
        let title = name
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        commands::create::run(&self.backend, &self.paths, &title, Utc::now())
    }

    pub fn regen(&self) -> Result<commands::CmdResult> {
        commands::regen::run(&self.backend, &self.paths, Utc::now())
    }

    pub fn state(&self) -> Result<DirState> {
        state::probe(&self.backend, &self.paths)
    }

    pub fn require_managed(&self) -> Result<()> {
        state::require_managed(&self.backend, &self.paths)
    }

    pub fn paths(&self) -> &AdrPaths {
        &self.paths
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
