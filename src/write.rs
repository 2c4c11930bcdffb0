//! Physical effects against the destination tree.
//!
//! The [`Writer`] owns the destination root and performs every mutation the
//! build makes: writing rendered records, copying passthrough assets, and
//! cleaning stale output before a full rebuild. Operations propagate the
//! first I/O failure without rollback — files already written stay on disk —
//! and nothing here retries; the driver decides whether to abort or continue.
//!
//! None of these operations are safe to run concurrently against the same
//! destination subtree. A build sequences them strictly: clean, then
//! discovery, then save/copy.

use crate::types::FileRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    /// A rendered record reached the writer with no output location — a
    /// configuration error, not a skippable condition.
    #[error("no destination paths for {0}")]
    NoDestinationPaths(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Performs writes, copies, and cleanup under a destination root.
pub struct Writer {
    destination: PathBuf,
}

impl Writer {
    /// Anchor a writer at `destination`, creating the directory (and missing
    /// parents) if needed. This is the only filesystem mutation performed
    /// outside an explicit save/copy/cleanup call.
    pub fn new(destination: &Path) -> Result<Self, WriteError> {
        if !destination.exists() {
            fs::create_dir_all(destination)?;
        }
        Ok(Writer {
            destination: destination.to_path_buf(),
        })
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Write a rendered record to every one of its destination paths,
    /// creating intermediate directories as needed.
    ///
    /// A record with several paths (permalink aliases) gets the same bytes at
    /// each. An empty path set fails before any filesystem effect.
    pub fn save(&self, record: &FileRecord) -> Result<(), WriteError> {
        if record.destination_paths.is_empty() {
            return Err(WriteError::NoDestinationPaths(record.source_path.clone()));
        }
        let content = record.rendered_content.as_deref().unwrap_or_default();
        for dest in &record.destination_paths {
            let target = self.destination.join(dest);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)?;
        }
        Ok(())
    }

    /// Mirror asset records into the destination: directory entries are
    /// created (no error when already present), files are copied byte-for-byte,
    /// overwriting existing output. Returns the source paths actually copied.
    pub fn copy_assets(&self, records: &[FileRecord]) -> Result<Vec<PathBuf>, WriteError> {
        let mut copied = Vec::new();
        for record in records {
            let target = self.destination.join(&record.relative_path);
            if record.is_dir {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(&record.source_path, &target)?;
                copied.push(record.source_path.clone());
            }
        }
        Ok(copied)
    }

    /// Remove every direct child of the destination root, leaving the root
    /// itself in place. Destructive and irreversible — the caller confirms the
    /// destination is correct before invoking this.
    pub fn cleanup_destination(&self) -> Result<(), WriteError> {
        for entry in fs::read_dir(&self.destination)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}
