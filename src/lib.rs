//! # sitescan
//!
//! Content discovery and output mapping for static sites. Given a source
//! directory and a configuration naming its special subdirectories, sitescan
//! classifies every relevant file into a content kind — post, page, layout,
//! or passthrough asset — computes where output must be written, and performs
//! the copy/write/cleanup effects against the destination tree.
//!
//! # Architecture
//!
//! ```text
//! 1. Discover   source/   →  FileRecords     (classification + filtering)
//! 2. Render     records   →  bytes + paths   (external — not this crate)
//! 3. Write      records   →  _site/          (save, copy assets, cleanup)
//! ```
//!
//! Rendering is deliberately out of scope: the rendering pipeline consumes
//! post/page/layout records, fills in `destination_paths` and
//! `rendered_content`, and hands them back for [`write::Writer::save`].
//! Assets skip rendering and are copied byte-for-byte.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading and validation — the immutable configuration snapshot |
//! | [`paths`] | Path resolution anchored at the source root; `/`-separated relative paths |
//! | [`matcher`] | Extension-set filename predicates |
//! | [`types`] | Classified file records ([`types::FileRecord`], [`types::Inventory`]) |
//! | [`locate`] | Discovery: posts, pages, layouts, assets, with include/exclude overrides |
//! | [`write`] | Destination effects: save, copy assets, cleanup, directory creation |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Absent directories are not errors
//!
//! A site with no `_layouts` or `_posts` directory is a site that does not
//! use layouts or posts. Directory resolution returns `Option` and discovery
//! degrades to an empty result; only a missing *source* root is fatal.
//!
//! ## Explicit roots, no working-directory mutation
//!
//! Every relative path is resolved against an explicitly passed root. The
//! process working directory is never consulted or changed, so resolution is
//! referentially transparent and the library is testable in isolation.
//!
//! ## No persistent state
//!
//! Discovery rebuilds its collections from the live filesystem on every call.
//! There is no manifest, index, or cache between builds — the destination
//! tree itself is the only persisted artifact. This keeps the core
//! single-threaded and lock-free: nothing is shared between calls.
//!
//! ## Include/exclude precedence
//!
//! `include` entries naming files win over everything, including `exclude`
//! patterns; `include` entries naming directories add walk roots whose
//! contents remain subject to the extension filter and `exclude`. See
//! [`locate`] for the full contract.

pub mod config;
pub mod locate;
pub mod matcher;
pub mod output;
pub mod paths;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
