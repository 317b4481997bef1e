//! # Templates
//!
//! Default text for generated files ships inside the binary. The index and record
//! templates can be overridden per project by dropping a file into `adr/templates/`;
//! an override on disk always wins over the built-in text.
//!
//! Placeholders are plain `{{name}}` markers. Only the first occurrence of each one is
//! substituted, so a template can mention a placeholder literally after using it once.

use crate::store::StorageBackend;
use log::{debug, warn};
use std::path::Path;

pub const INDEX_TEMPLATE: &str = include_str!("templates/readme_template.md");
pub const RECORD_TEMPLATE: &str = include_str!("templates/adr_template.md");
pub const TEMPLATES_README: &str = include_str!("templates/templates_readme.md");

pub const TIMESTAMP_PLACEHOLDER: &str = "{{timestamp}}";
pub const CONTENTS_PLACEHOLDER: &str = "{{contents}}";
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Load the override at `path`, or `default` when there is none.
///
/// An empty override counts as missing, and so does one that cannot be read at all
/// (a directory, no permission). Generation never fails because of a broken override.
pub fn load<B: StorageBackend>(backend: &B, path: &Path, default: &str) -> String {
    match backend.read_to_string(path) {
        Ok(Some(content)) if !content.is_empty() => {
            debug!("Using template override {}", path.display());
            content
        }
        Ok(_) => default.to_string(),
        Err(e) => {
            warn!("Ignoring template override {}: {}", path.display(), e);
            default.to_string()
        }
    }
}

/// Replace the first occurrence of `placeholder` with `value`.
pub fn fill(template: &str, placeholder: &str, value: &str) -> String {
    template.replacen(placeholder, value, 1)
}
