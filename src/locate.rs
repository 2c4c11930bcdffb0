//! Content classification and discovery.
//!
//! Walks the source tree once per content kind and classifies every relevant
//! file into a [`FileRecord`]:
//!
//! - **Posts**: files under the posts directory matching the markdown
//!   extensions.
//! - **Pages**: files anywhere outside the special directories matching the
//!   combined processable+markdown extensions, plus `include` overrides.
//! - **Layouts**: every file under the layouts directory, keyed by its
//!   layouts-relative path.
//! - **Assets** ("the rest"): everything else — the pages pipeline with the
//!   extension filter inverted, directories included so empty ones can be
//!   mirrored.
//!
//! ## Special directories
//!
//! The posts, layouts, includes, plugins, and destination directories are
//! handled by dedicated scanners, so the generic page/asset walks prune them.
//! Their source-relative paths are recomputed on every discovery call;
//! directories that fail to resolve are simply not special (and not scanned by
//! their dedicated operation either — a missing `_layouts` means "no layouts",
//! never an error).
//!
//! ## Include/exclude override precedence
//!
//! An `include` entry naming a directory adds an extra walk root whose
//! contents still pass through the extension filter and the `exclude`
//! patterns. An `include` entry naming a file is force-added and is immune to
//! `exclude`. The asymmetry is deliberate and load-bearing: directory-level
//! includes are still filtered, explicit file-level includes are not.
//!
//! Every discovery operation is idempotent and rebuilds its result from the
//! live filesystem — no state is carried between calls.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::matcher::ExtMatcher;
use crate::paths;
use crate::types::{FileKind, FileRecord, Inventory};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("source directory not found: {0}")]
    SourceMissing(PathBuf),
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },
}

/// Discovers and classifies content under a resolved source root.
///
/// Construction resolves the source root once and compiles the exclude
/// patterns once; each `find_*` call re-derives everything else from the
/// configuration and the live filesystem.
#[derive(Debug)]
pub struct Locator {
    config: Config,
    source_root: PathBuf,
    excludes: GlobSet,
}

impl Locator {
    /// Anchor `config` at `base` (the directory its relative paths are
    /// resolved against — typically the directory holding `site.toml`).
    ///
    /// Fails when the source directory cannot be resolved (no source means
    /// nothing to build) or when an exclude pattern does not compile.
    pub fn new(base: &Path, config: Config) -> Result<Self, LocateError> {
        let logical = base.join(&config.source);
        let source_root = paths::resolve_root(&logical)
            .filter(|p| p.is_dir())
            .ok_or_else(|| LocateError::SourceMissing(logical.clone()))?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|source| LocateError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let excludes = builder
            .build()
            .map_err(|source| LocateError::InvalidPattern {
                pattern: config.exclude.join(", "),
                source,
            })?;

        Ok(Locator {
            config,
            source_root,
            excludes,
        })
    }

    /// Canonical source root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The configuration snapshot this locator reads from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logical destination directory (not resolved — it may not exist yet).
    pub fn destination_dir(&self) -> PathBuf {
        let dest = Path::new(&self.config.destination);
        if dest.is_absolute() {
            dest.to_path_buf()
        } else {
            self.source_root.join(dest)
        }
    }

    fn posts_dir(&self) -> Option<PathBuf> {
        paths::resolve(&self.source_root, Path::new(&self.config.posts))
    }

    fn layouts_dir(&self) -> Option<PathBuf> {
        paths::resolve(&self.source_root, Path::new(&self.config.layouts))
    }

    fn includes_dir(&self) -> Option<PathBuf> {
        paths::resolve(&self.source_root, Path::new(&self.config.includes))
    }

    fn plugins_dir(&self) -> Option<PathBuf> {
        paths::resolve(&self.source_root, Path::new(&self.config.plugins))
    }

    /// Source-relative paths of the special directories, skipping any that
    /// fail to resolve. Used as prune roots for the generic page/asset walks.
    fn special_dirs(&self) -> Vec<String> {
        let candidates = [
            self.posts_dir(),
            self.layouts_dir(),
            self.includes_dir(),
            paths::resolve(&self.source_root, Path::new(&self.config.destination)),
            self.plugins_dir(),
        ];
        candidates
            .into_iter()
            .flatten()
            .map(|dir| paths::relativize(&self.source_root, &dir))
            .filter(|rel| !rel.is_empty())
            .collect()
    }

    /// True when `rel`/`abs` hit an exclude pattern. Patterns are tried
    /// against both the walk-relative path and the absolute path, so both
    /// `"drafts/**"` and absolute-style patterns work.
    fn is_excluded(&self, rel: &str, abs: &Path) -> bool {
        self.excludes.is_match(rel) || self.excludes.is_match(abs)
    }

    /// Site posts: files under the posts directory matching `markdown_ext`.
    ///
    /// Empty when `markdown_ext` is empty or the posts directory is absent.
    /// Relative paths are relative to the posts directory.
    pub fn find_posts(&self) -> Vec<FileRecord> {
        let matcher = ExtMatcher::new(&self.config.markdown_ext);
        if matcher.is_empty() {
            return Vec::new();
        }
        let Some(dir) = self.posts_dir() else {
            debug!("posts directory absent, skipping");
            return Vec::new();
        };

        walk_files(&dir, &[])
            .filter(|path| matcher.matches(&name_of(path)))
            .map(|path| {
                let rel = paths::relativize(&dir, &path);
                FileRecord::new(FileKind::Post, path, rel, false)
            })
            .collect()
    }

    /// Site pages: files outside special directories matching the combined
    /// processable+markdown extensions, with `include`/`exclude` overrides.
    pub fn find_pages(&self) -> Vec<FileRecord> {
        let matcher = ExtMatcher::new(self.config.processable_union());
        if matcher.is_empty() {
            return Vec::new();
        }
        let special = self.special_dirs();
        let mut records = Vec::new();

        for path in walk_files(&self.source_root, &special) {
            if !matcher.matches(&name_of(&path)) {
                continue;
            }
            let rel = paths::relativize(&self.source_root, &path);
            if self.is_excluded(&rel, &path) {
                debug!("excluded page {rel}");
                continue;
            }
            records.push(FileRecord::new(FileKind::Page, path, rel, false));
        }

        for entry in &self.config.include {
            let Some(abs) = paths::resolve(&self.source_root, Path::new(entry)) else {
                debug!("include entry {entry:?} does not resolve, skipping");
                continue;
            };
            if abs.is_dir() {
                // Directory-level includes stay subject to exclude patterns.
                for path in walk_files(&abs, &[]) {
                    if !matcher.matches(&name_of(&path)) {
                        continue;
                    }
                    let rel = paths::relativize(&abs, &path);
                    if self.is_excluded(&rel, &path) {
                        continue;
                    }
                    records.push(FileRecord::new(FileKind::Page, path, rel, false));
                }
            } else if matcher.matches(&name_of(&abs)) {
                // File-level includes bypass exclude patterns entirely.
                let rel = name_of(&abs);
                records.push(FileRecord::new(FileKind::Page, abs, rel, false));
            }
        }

        records
    }

    /// Site layouts, keyed by layouts-relative path. Every regular file under
    /// the layouts directory is a layout; there is no extension filter.
    pub fn find_layouts(&self) -> BTreeMap<String, FileRecord> {
        match self.layouts_dir() {
            Some(dir) => layouts_from_roots(&[dir]),
            None => {
                debug!("layouts directory absent, skipping");
                BTreeMap::new()
            }
        }
    }

    /// The rest of the site: passthrough assets, mirroring [`find_pages`]
    /// with the extension polarity inverted. Directory entries are kept so
    /// the writer can recreate empty directories at the destination.
    pub fn find_assets(&self) -> Vec<FileRecord> {
        let matcher = ExtMatcher::new(self.config.processable_union());
        let special = self.special_dirs();
        let mut records = Vec::new();

        for (path, is_dir) in walk_entries(&self.source_root, &special) {
            let name = name_of(&path);
            if !is_dir && (name == CONFIG_FILE_NAME || matcher.matches(&name)) {
                continue;
            }
            let rel = paths::relativize(&self.source_root, &path);
            if self.is_excluded(&rel, &path) {
                debug!("excluded asset {rel}");
                continue;
            }
            records.push(FileRecord::new(FileKind::Asset, path, rel, is_dir));
        }

        for entry in &self.config.include {
            let Some(abs) = paths::resolve(&self.source_root, Path::new(entry)) else {
                continue;
            };
            if abs.is_dir() {
                for (path, is_dir) in walk_entries(&abs, &[]) {
                    let name = name_of(&path);
                    if !is_dir && (name == CONFIG_FILE_NAME || matcher.matches(&name)) {
                        continue;
                    }
                    let rel = paths::relativize(&abs, &path);
                    if self.is_excluded(&rel, &path) {
                        continue;
                    }
                    records.push(FileRecord::new(FileKind::Asset, path, rel, is_dir));
                }
            } else if !matcher.matches(&name_of(&abs)) {
                let rel = name_of(&abs);
                records.push(FileRecord::new(FileKind::Asset, abs, rel, false));
            }
        }

        records
    }

    /// Wrap an arbitrary existing path as a Page record.
    ///
    /// The relative path is computed against the source root; paths outside
    /// the source tree collapse to their basename. `None` when the path does
    /// not exist.
    pub fn item(&self, path: &Path) -> Option<FileRecord> {
        let abs = paths::resolve(&self.source_root, path)?;
        if !abs.is_file() {
            return None;
        }
        let mut rel = paths::relativize(&self.source_root, &abs);
        if rel.is_empty() {
            rel = name_of(&abs);
        }
        Some(FileRecord::new(FileKind::Page, abs, rel, false))
    }

    /// Run all four discovery operations and materialize the result.
    pub fn inventory(&self) -> Inventory {
        Inventory {
            posts: self.find_posts(),
            pages: self.find_pages(),
            layouts: self.find_layouts(),
            assets: self.find_assets(),
        }
    }
}

/// Collect layouts from walk roots in order; a later root's file wins when two
/// roots produce the same relative path.
fn layouts_from_roots(roots: &[PathBuf]) -> BTreeMap<String, FileRecord> {
    let mut layouts = BTreeMap::new();
    for root in roots {
        for path in walk_files(root, &[]) {
            let rel = paths::relativize(root, &path);
            layouts.insert(rel.clone(), FileRecord::new(FileKind::Layout, path, rel, false));
        }
    }
    layouts
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Recursive walk yielding regular files, pruning `prune` (root-relative,
/// `/`-separated) subtrees. Unreadable entries are skipped.
fn walk_files(root: &Path, prune: &[String]) -> impl Iterator<Item = PathBuf> {
    walk_entries(root, prune).filter_map(|(path, is_dir)| (!is_dir).then_some(path))
}

/// Recursive walk yielding `(path, is_dir)` for every entry below `root`
/// (the root itself is not yielded), pruning the given subtrees.
fn walk_entries(root: &Path, prune: &[String]) -> impl Iterator<Item = (PathBuf, bool)> {
    let root_owned = root.to_path_buf();
    let prune: Vec<String> = prune.to_vec();
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            let rel = paths::relativize(&root_owned, entry.path());
            !prune.iter().any(|p| *p == rel)
        })
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let is_dir = entry.file_type().is_dir();
            (entry.into_path(), is_dir)
        })
}
