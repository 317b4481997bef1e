use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::layout::AdrPaths;
use crate::state::{probe, DirState};
use crate::store::StorageBackend;
use crate::templates::TEMPLATES_README;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Bring the managed directory into a fresh, consistent state.
///
/// When something already occupies the path (a managed directory or a stray file),
/// `confirm` decides whether it gets wiped. Declining returns an aborted result and
/// leaves everything untouched.
pub fn run<B, C>(backend: &B, paths: &AdrPaths, now: DateTime<Utc>, confirm: C) -> Result<CmdResult>
where
    B: StorageBackend,
    C: FnOnce() -> Result<bool>,
{
    match probe(backend, paths)? {
        DirState::Absent => {}
        DirState::Managed | DirState::Conflict => {
            if !confirm()? {
                let mut result = CmdResult::aborted();
                result.add_message(CmdMessage::info("Aborting..."));
                return Ok(result);
            }
            info!("Removing existing {}", paths.root().display());
            backend.remove_all(paths.root())?;
        }
    }

    let mut written = establish_core_files(backend, paths)?;
    let listed = index::rebuild(backend, paths, now)?;
    written.push(paths.index());

    let mut result = CmdResult::default()
        .with_written(written)
        .with_listed(listed);
    result.add_message(CmdMessage::success(format!(
        "Initialized {}",
        AdrPaths::display(paths.root())
    )));
    Ok(result)
}

/// Create the directory skeleton. Safe to run over an existing tree: directories are
/// reused, the placeholder only appears in an empty `assets/`, and the templates README
/// is always rewritten.
fn establish_core_files<B: StorageBackend>(
    backend: &B,
    paths: &AdrPaths,
) -> Result<Vec<std::path::PathBuf>> {
    let mut written = Vec::new();

    backend.create_dir_all(&paths.assets())?;
    backend.create_dir_all(&paths.templates())?;

    if backend.list_dir(&paths.assets())?.is_empty() {
        debug!("assets/ is empty, adding placeholder");
        backend.write(&paths.assets_placeholder(), "")?;
        written.push(paths.assets_placeholder());
    }

    backend.write(&paths.templates_readme(), TEMPLATES_README)?;
    written.push(paths.templates_readme());

    Ok(written)
}
