//! Index (staging area)
//!
//! The index lists the files staged for the next commit, one line per `add`:
//!
//! ```text
//! <path> <hash>
//! ```
//!
//! Lines are only ever appended; a successful commit truncates the whole file.
//! Staging the same path twice keeps both lines, in order.

use crate::artifacts::objects::file_entry::FileEntry;
use crate::errors::{NeoError, NeoResult};
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `neo/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<FileEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file reads as an empty staging area. Blank lines are skipped.
    pub fn rehydrate(&mut self) -> NeoResult<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| NeoError::io(&*self.path, e))?;

        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(FileEntry::parse_index_line)
            .collect::<NeoResult<Vec<_>>>()?;

        Ok(())
    }

    /// Append one staging line, on disk and in memory
    pub fn stage(&mut self, entry: FileEntry) -> NeoResult<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NeoError::io(&*self.path, e))?;

        writeln!(index_file, "{}", entry.to_index_line())
            .map_err(|e| NeoError::io(&*self.path, e))?;
        debug!(path = %entry.path, oid = %entry.oid, "staged file");

        self.entries.push(entry);

        Ok(())
    }

    /// Truncate the staging area
    pub fn clear(&mut self) -> NeoResult<()> {
        std::fs::write(&self.path, b"").map_err(|e| NeoError::io(&*self.path, e))?;
        self.entries.clear();

        Ok(())
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
