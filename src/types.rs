//! Classified file records shared between discovery and writing.
//!
//! Discovery ([`crate::locate`]) produces [`FileRecord`]s; the external
//! rendering stage fills in `destination_paths` and `rendered_content` for
//! posts, pages, and layouts; the writer ([`crate::write`]) consumes them.
//! Asset records bypass rendering entirely — they are copied byte-for-byte
//! from `source_path` and never carry destination paths or content.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Content kind assigned at discovery time. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Content file under the posts directory, filtered by markdown extensions.
    Post,
    /// Content file in the source tree (or explicitly included), filtered by
    /// processable extensions.
    Page,
    /// Template file under the layouts directory, unfiltered by extension.
    Layout,
    /// Anything else — copied verbatim to the destination.
    Asset,
}

/// A classified source file (or, for assets, possibly a directory).
///
/// `relative_path` is relative to the walk root that discovered the record:
/// the posts directory for posts, the layouts directory for layouts, the
/// source root for pages and assets. Force-included files from outside any
/// walk root collapse to their basename. Always `/`-separated.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub kind: FileKind,
    /// Absolute path to the underlying file on disk.
    pub source_path: PathBuf,
    /// Walk-root-relative path, forward separators, no `..` segments.
    pub relative_path: String,
    /// Filename component of `source_path`.
    pub file_name: String,
    /// True for asset records that mirror a source directory.
    pub is_dir: bool,
    /// Destination-root-relative output paths, ordered, duplicate-free.
    /// Populated by the external rendering stage, not by discovery.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub destination_paths: Vec<String>,
    /// Rendered payload, absent until the record passes through rendering.
    #[serde(skip)]
    pub rendered_content: Option<Vec<u8>>,
}

impl FileRecord {
    pub fn new(kind: FileKind, source_path: PathBuf, relative_path: String, is_dir: bool) -> Self {
        let file_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        FileRecord {
            kind,
            source_path,
            relative_path,
            file_name,
            is_dir,
            destination_paths: Vec::new(),
            rendered_content: None,
        }
    }

    /// Append a destination path, keeping the set ordered and duplicate-free.
    pub fn add_destination(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.destination_paths.contains(&path) {
            self.destination_paths.push(path);
        }
    }

    /// Attach rendered output bytes.
    pub fn set_rendered_content(&mut self, bytes: Vec<u8>) {
        self.rendered_content = Some(bytes);
    }
}

/// One full discovery pass over a site: every content kind, materialized.
///
/// Built fresh on every call — there is no cache or persisted index between
/// builds. Layouts are keyed by their layouts-relative path.
#[derive(Debug, Serialize)]
pub struct Inventory {
    pub posts: Vec<FileRecord>,
    pub pages: Vec<FileRecord>,
    pub layouts: BTreeMap<String, FileRecord>,
    pub assets: Vec<FileRecord>,
}

impl Inventory {
    /// Count of asset records that are files (directory mirrors excluded).
    pub fn asset_file_count(&self) -> usize {
        self.assets.iter().filter(|r| !r.is_dir).count()
    }
}

/// Convenience for tests and callers that build records by hand.
pub fn record_for(kind: FileKind, path: &Path, relative_path: &str) -> FileRecord {
    FileRecord::new(kind, path.to_path_buf(), relative_path.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_extracts_file_name() {
        let r = FileRecord::new(
            FileKind::Post,
            PathBuf::from("/site/_posts/2020-01-01-hi.md"),
            "2020-01-01-hi.md".to_string(),
            false,
        );
        assert_eq!(r.file_name, "2020-01-01-hi.md");
        assert!(r.destination_paths.is_empty());
        assert!(r.rendered_content.is_none());
    }

    #[test]
    fn add_destination_keeps_order_and_uniqueness() {
        let mut r = record_for(FileKind::Post, Path::new("/s/p.md"), "p.md");
        r.add_destination("2020/01/01/hi/index.html");
        r.add_destination("aliases/hi.html");
        r.add_destination("2020/01/01/hi/index.html");
        assert_eq!(
            r.destination_paths,
            vec!["2020/01/01/hi/index.html", "aliases/hi.html"]
        );
    }

    #[test]
    fn asset_file_count_skips_directories() {
        let mut dir = record_for(FileKind::Asset, Path::new("/s/img"), "img");
        dir.is_dir = true;
        let file = record_for(FileKind::Asset, Path::new("/s/img/logo.png"), "img/logo.png");
        let inv = Inventory {
            posts: vec![],
            pages: vec![],
            layouts: BTreeMap::new(),
            assets: vec![dir, file],
        };
        assert_eq!(inv.asset_file_count(), 1);
    }
}
