//! Shared test utilities for the sitescan test suite.
//!
//! Provides a temp-directory site fixture plus record extractors used by the
//! `locate`, `write`, and `output` module tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = SiteFixture::new();
//! site.file("_posts/2020-01-01-hi.md", "hello");
//! site.file("img/logo.png", "bytes");
//!
//! let posts = site.locator().find_posts();
//! assert_eq!(rel_paths(&posts), vec!["2020-01-01-hi.md"]);
//! ```

use crate::config::Config;
use crate::locate::Locator;
use crate::types::FileRecord;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A source tree materialized in a temp directory.
///
/// Each test gets an isolated tree it can shape freely; the directory is
/// removed when the fixture drops.
pub struct SiteFixture {
    tmp: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        SiteFixture {
            tmp: TempDir::new().unwrap(),
        }
    }

    /// Source root of the fixture.
    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    /// Create a file at `rel` (creating parent directories) with `contents`.
    pub fn file(&self, rel: &str, contents: &str) {
        write_file(self.path(), rel, contents);
    }

    /// Create a directory at `rel`.
    pub fn dir(&self, rel: &str) {
        fs::create_dir_all(self.path().join(rel)).unwrap();
    }

    /// A locator over this fixture with the default configuration.
    pub fn locator(&self) -> Locator {
        self.locator_with(|_| {})
    }

    /// A locator over this fixture with the default configuration tweaked.
    pub fn locator_with(&self, tweak: impl FnOnce(&mut Config)) -> Locator {
        let mut config = Config::default();
        tweak(&mut config);
        Locator::new(self.path(), config).unwrap()
    }
}

/// Create a file under `root` at `rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Relative paths of a record slice, in discovery order.
pub fn rel_paths(records: &[FileRecord]) -> Vec<String> {
    records.iter().map(|r| r.relative_path.clone()).collect()
}
