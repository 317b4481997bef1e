use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::layout::AdrPaths;
use crate::state::require_managed;
use crate::store::StorageBackend;
use chrono::{DateTime, Utc};

pub fn run<B: StorageBackend>(
    backend: &B,
    paths: &AdrPaths,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    require_managed(backend, paths)?;

    let listed = index::rebuild(backend, paths, now)?;
    let mut result = CmdResult::default()
        .with_written(vec![paths.index()])
        .with_listed(listed);
    result.add_message(CmdMessage::success(format!(
        "Regenerated {}",
        AdrPaths::display(&paths.index())
    )));
    Ok(result)
}
