//! CLI output formatting for discovery and write operations.
//!
//! Output is information-centric: each section leads with the content kind
//! and count, each record with its positional index and walk-relative path,
//! with the absolute source shown as indented context only when it adds
//! information (force-included files living outside the scanned roots).
//!
//! ```text
//! Posts (1)
//!     001 2020-01-01-hi.md
//! Pages (2)
//!     001 about.html
//!     002 note.html
//!         Source: /elsewhere/note.html
//! Layouts (1)
//!     001 default.html
//! Assets (2 files, 1 directory)
//!     001 img/
//!     002 img/logo.png
//!
//! Discovered 1 post, 2 pages, 1 layout, 2 assets
//! ```
//!
//! Each operation has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::types::{FileRecord, Inventory};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Singular/plural unit formatting: `1 post`, `3 posts`.
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// One record line: index + relative path, `/`-suffixed for directories,
/// with a `Source:` context line when the record's source lies outside
/// `source_root` (i.e. a force-included file).
fn record_lines(index: usize, record: &FileRecord, source_root: &Path) -> Vec<String> {
    let suffix = if record.is_dir { "/" } else { "" };
    let mut lines = vec![format!(
        "    {} {}{}",
        format_index(index),
        record.relative_path,
        suffix
    )];
    if !record.is_dir && !record.source_path.starts_with(source_root) {
        lines.push(format!("        Source: {}", record.source_path.display()));
    }
    lines
}

/// Format the full discovery inventory.
pub fn format_inventory(inventory: &Inventory, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Posts ({})", inventory.posts.len()));
    for (i, record) in inventory.posts.iter().enumerate() {
        lines.extend(record_lines(i + 1, record, source_root));
    }

    lines.push(format!("Pages ({})", inventory.pages.len()));
    for (i, record) in inventory.pages.iter().enumerate() {
        lines.extend(record_lines(i + 1, record, source_root));
    }

    lines.push(format!("Layouts ({})", inventory.layouts.len()));
    for (i, record) in inventory.layouts.values().enumerate() {
        lines.extend(record_lines(i + 1, record, source_root));
    }

    let file_count = inventory.asset_file_count();
    let dir_count = inventory.assets.len() - file_count;
    let dirs = if dir_count == 1 {
        "1 directory".to_string()
    } else {
        format!("{dir_count} directories")
    };
    lines.push(format!(
        "Assets ({}, {})",
        count_noun(file_count, "file"),
        dirs
    ));
    for (i, record) in inventory.assets.iter().enumerate() {
        lines.extend(record_lines(i + 1, record, source_root));
    }

    lines.push(String::new());
    lines.push(format!(
        "Discovered {}, {}, {}, {}",
        count_noun(inventory.posts.len(), "post"),
        count_noun(inventory.pages.len(), "page"),
        count_noun(inventory.layouts.len(), "layout"),
        count_noun(inventory.assets.len(), "asset"),
    ));

    lines
}

/// Print the discovery inventory to stdout.
pub fn print_inventory(inventory: &Inventory, source_root: &Path) {
    for line in format_inventory(inventory, source_root) {
        println!("{}", line);
    }
}

/// Format the asset-copy report: every copied source path plus a summary.
pub fn format_copy_report(copied: &[std::path::PathBuf], destination: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, path) in copied.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), path.display()));
    }
    lines.push(format!(
        "Copied {} to {}",
        count_noun(copied.len(), "file"),
        destination.display()
    ));
    lines
}

/// Print the asset-copy report to stdout.
pub fn print_copy_report(copied: &[std::path::PathBuf], destination: &Path) {
    for line in format_copy_report(copied, destination) {
        println!("{}", line);
    }
}

/// Format the destination-cleanup report.
pub fn format_clean_report(destination: &Path) -> Vec<String> {
    vec![format!("Cleaned {}", destination.display())]
}

/// Print the destination-cleanup report to stdout.
pub fn print_clean_report(destination: &Path) {
    for line in format_clean_report(destination) {
        println!("{}", line);
    }
}
