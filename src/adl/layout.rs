//! Where everything lives inside the managed directory.
//!
//! ```text
//! adr/
//! ├── README.md                  # generated index
//! ├── 00000-<title>.md           # one per record
//! ├── assets/.gitkeep            # placeholder, only while assets/ is empty
//! └── templates/
//!     ├── README.md              # rewritten on every init
//!     ├── template_adr.md        # optional record template override
//!     └── template_readme.md     # optional index template override
//! ```

use std::path::{Path, PathBuf};

pub const DEFAULT_DIR: &str = "adr";
pub const INDEX_FILE: &str = "README.md";

const ASSETS_DIR: &str = "assets";
const PLACEHOLDER_FILE: &str = ".gitkeep";
const TEMPLATES_DIR: &str = "templates";
const TEMPLATES_README_FILE: &str = "README.md";
const RECORD_TEMPLATE_FILE: &str = "template_adr.md";
const INDEX_TEMPLATE_FILE: &str = "template_readme.md";

/// Paths of the managed directory, relative to the storage backend root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdrPaths {
    root: PathBuf,
}

impl Default for AdrPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

impl AdrPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn record(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn assets(&self) -> PathBuf {
        self.root.join(ASSETS_DIR)
    }

    pub fn assets_placeholder(&self) -> PathBuf {
        self.assets().join(PLACEHOLDER_FILE)
    }

    pub fn templates(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn templates_readme(&self) -> PathBuf {
        self.templates().join(TEMPLATES_README_FILE)
    }

    pub fn record_template(&self) -> PathBuf {
        self.templates().join(RECORD_TEMPLATE_FILE)
    }

    pub fn index_template(&self) -> PathBuf {
        self.templates().join(INDEX_TEMPLATE_FILE)
    }

    /// `./adr/...` style rendering for user-facing messages.
    pub fn display(path: &Path) -> String {
        format!("./{}", path.display())
    }
}
