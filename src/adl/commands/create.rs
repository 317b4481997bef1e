use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::layout::AdrPaths;
use crate::record::RecordName;
use crate::state::require_managed;
use crate::store::StorageBackend;
use crate::templates::{self, NAME_PLACEHOLDER};
use chrono::{DateTime, Utc};
use log::info;
use std::path::PathBuf;

/// Write a single record file for `record`. Overwrites whatever is already at that path.
pub fn write_record<B: StorageBackend>(
    backend: &B,
    paths: &AdrPaths,
    record: &RecordName,
) -> Result<PathBuf> {
    let template = templates::load(backend, &paths.record_template(), templates::RECORD_TEMPLATE);
    let body = templates::fill(&template, NAME_PLACEHOLDER, &record.heading());

    let path = paths.record(&record.file_name());
    backend.write(&path, &body)?;
    info!("Created record {}", path.display());
    Ok(path)
}

/// The number the next record gets: how many record files exist now.
///
/// Nothing is persisted, so deleting a record lets its number (or a later one) be reused.
pub fn next_number<B: StorageBackend>(backend: &B, paths: &AdrPaths) -> Result<usize> {
    Ok(index::record_files(backend, paths)?.len())
}

pub fn run<B: StorageBackend>(
    backend: &B,
    paths: &AdrPaths,
    title: &str,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    require_managed(backend, paths)?;

    let record = RecordName::new(next_number(backend, paths)?, title);
    let record_path = write_record(backend, paths, &record)?;
    let listed = index::rebuild(backend, paths, now)?;

    let mut result = CmdResult::default()
        .with_written(vec![record_path.clone(), paths.index()])
        .with_listed(listed);
    result.add_message(CmdMessage::success(format!(
        "Created {}",
        AdrPaths::display(&record_path)
    )));
    Ok(result)
}
