//! # The Index
//!
//! `adr/README.md` is a derived artifact: a pure function of the files sitting directly in
//! the managed directory plus the index template. It is never edited in place, only
//! regenerated.
//!
//! ## Which files count
//!
//! Every regular file directly inside `adr/` except the index itself. Subdirectories
//! (`assets/`, `templates/`) are skipped simply because they are not files. Nothing checks
//! that a file looks like a record, so a stray `notes.txt` gets listed (and counted when
//! numbering the next record) like any other.
//!
//! ## Ordering
//!
//! Names sort byte-wise, not numerically. The zero padded prefix makes that match creation
//! order as long as numbers stay below 100000.

use crate::error::Result;
use crate::layout::{AdrPaths, INDEX_FILE};
use crate::store::StorageBackend;
use crate::templates::{self, CONTENTS_PLACEHOLDER, TIMESTAMP_PLACEHOLDER};
use chrono::{DateTime, Utc};

/// RFC 1123 style, always in UTC: `Sun, 18 Oct 2026 09:30:00 GMT`.
const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Names of all record files, unsorted.
pub fn record_files<B: StorageBackend>(backend: &B, paths: &AdrPaths) -> Result<Vec<String>> {
    Ok(backend
        .list_dir(paths.root())?
        .into_iter()
        .filter(|entry| entry.is_file() && entry.name != INDEX_FILE)
        .map(|entry| entry.name)
        .collect())
}

pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// One ` - [name](./name)` line per file in byte order. Only trailing whitespace is
/// trimmed, so the leading space of the first line survives.
pub fn format_links(files: &[String]) -> String {
    let mut sorted: Vec<&String> = files.iter().collect();
    sorted.sort();

    let block: String = sorted
        .into_iter()
        .map(|name| format!(" - [{name}](./{name})\n"))
        .collect();
    block.trim_end().to_string()
}

/// Fill the index template. Timestamp first, then contents, so a file name that happens to
/// contain a placeholder is never expanded.
pub fn render(template: &str, now: DateTime<Utc>, files: &[String]) -> String {
    let stamped = templates::fill(template, TIMESTAMP_PLACEHOLDER, &format_timestamp(now));
    templates::fill(&stamped, CONTENTS_PLACEHOLDER, &format_links(files))
}

/// Regenerate the index from what is on disk right now.
pub fn rebuild<B: StorageBackend>(
    backend: &B,
    paths: &AdrPaths,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let template = templates::load(backend, &paths.index_template(), templates::INDEX_TEMPLATE);
    let mut files = record_files(backend, paths)?;
    files.sort();
    backend.write(&paths.index(), &render(&template, now, &files))?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use chrono::TimeZone;
    use std::path::Path;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap()
    }

    fn managed() -> (MemBackend, AdrPaths) {
        let backend = MemBackend::new();
        backend.create_dir_all(Path::new("adr/assets")).unwrap();
        backend.create_dir_all(Path::new("adr/templates")).unwrap();
        (backend, AdrPaths::default())
    }

    #[test]
    fn timestamp_is_rfc1123_utc() {
        assert_eq!(format_timestamp(fixed_time()), "Sun, 18 Oct 2026 09:30:05 GMT");
    }

    #[test]
    fn links_are_sorted_bytewise() {
        let files = vec![
            "00002-c.md".to_string(),
            "00000-a.md".to_string(),
            "00010-b.md".to_string(),
        ];
        assert_eq!(
            format_links(&files),
            " - [00000-a.md](./00000-a.md)\n - [00002-c.md](./00002-c.md)\n - [00010-b.md](./00010-b.md)"
        );
    }

    #[test]
    fn bytewise_order_is_not_numeric() {
        let files = vec!["100000-z.md".to_string(), "99999-y.md".to_string()];
        let links = format_links(&files);
        assert!(links.starts_with(" - [100000-z.md]"));
    }

    #[test]
    fn empty_listing_renders_nothing() {
        assert_eq!(format_links(&[]), "");
    }

    #[test]
    fn render_fills_both_placeholders() {
        let out = render(
            "at {{timestamp}}\n\n{{contents}}\n",
            fixed_time(),
            &["00000-a.md".to_string()],
        );
        assert_eq!(
            out,
            "at Sun, 18 Oct 2026 09:30:05 GMT\n\n - [00000-a.md](./00000-a.md)\n"
        );
    }

    #[test]
    fn record_files_skip_index_and_directories() {
        let (backend, paths) = managed();
        backend.write(Path::new("adr/README.md"), "old").unwrap();
        backend.write(Path::new("adr/00000-a.md"), "").unwrap();
        backend.write(Path::new("adr/notes.txt"), "").unwrap();

        let mut files = record_files(&backend, &paths).unwrap();
        files.sort();
        assert_eq!(files, vec!["00000-a.md".to_string(), "notes.txt".to_string()]);
    }

    #[test]
    fn rebuild_writes_index_from_directory_contents() {
        let (backend, paths) = managed();
        backend.write(Path::new("adr/00001-b.md"), "").unwrap();
        backend.write(Path::new("adr/00000-a.md"), "").unwrap();

        let listed = rebuild(&backend, &paths, fixed_time()).unwrap();
        assert_eq!(listed, vec!["00000-a.md".to_string(), "00001-b.md".to_string()]);

        let index = backend.read_to_string(&paths.index()).unwrap().unwrap();
        assert!(index.contains("Sun, 18 Oct 2026 09:30:05 GMT"));
        assert!(index.contains("\n - [00000-a.md](./00000-a.md)\n - [00001-b.md](./00001-b.md)"));
        assert!(!index.contains("{{contents}}"));
    }

    #[test]
    fn rebuild_is_idempotent_apart_from_timestamp() {
        let (backend, paths) = managed();
        backend.write(Path::new("adr/00000-a.md"), "").unwrap();

        rebuild(&backend, &paths, fixed_time()).unwrap();
        let first = backend.read_to_string(&paths.index()).unwrap().unwrap();
        rebuild(&backend, &paths, fixed_time()).unwrap();
        let second = backend.read_to_string(&paths.index()).unwrap().unwrap();
        assert_eq!(first, second);

        let later = fixed_time() + chrono::Duration::hours(1);
        rebuild(&backend, &paths, later).unwrap();
        let third = backend.read_to_string(&paths.index()).unwrap().unwrap();
        assert_eq!(
            first.replace("09:30:05", "10:30:05"),
            third,
            "only the timestamp may change"
        );
    }

    #[test]
    fn rebuild_uses_index_template_override() {
        let (backend, paths) = managed();
        backend
            .write(
                &paths.index_template(),
                "custom {{contents}} / {{timestamp}}",
            )
            .unwrap();
        backend.write(Path::new("adr/00000-a.md"), "").unwrap();

        rebuild(&backend, &paths, fixed_time()).unwrap();
        let index = backend.read_to_string(&paths.index()).unwrap().unwrap();
        assert_eq!(
            index,
            "custom  - [00000-a.md](./00000-a.md) / Sun, 18 Oct 2026 09:30:05 GMT"
        );
    }
}
