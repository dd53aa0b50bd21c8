//! Staging index
//!
//! The index is an append-only text log at `.repo/index`, one
//! `<mode> <path> <blob-id>` line per staged file. It is read in full
//! whenever a tree is built and truncated after a successful commit.
//!
//! Entries keep their staging order; the same path may appear more than once
//! and the tree builder keeps the entry staged last.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.repo/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<IndexEntry>,
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

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the entries from disk
    ///
    /// A missing index file is an empty index. A line that cannot be parsed is
    /// reported as a corrupt index with its 1-based line number.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry = IndexEntry::parse_line(line).map_err(|e| RepositoryError::CorruptIndex {
                line: number + 1,
                reason: e.to_string(),
            })?;
            self.entries.push(entry);
        }

        tracing::debug!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    /// Append an entry to the log and to the in-memory list
    pub fn append(&mut self, entry: IndexEntry) -> anyhow::Result<()> {
        let line = entry.to_line()?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;

        tracing::debug!(path = %entry.path().display(), oid = %entry.oid, "staged entry");
        self.entries.push(entry);

        Ok(())
    }

    /// Empty the index, on disk and in memory
    pub fn clear(&mut self) -> anyhow::Result<()> {
        std::fs::write(&self.path, "")
            .with_context(|| format!("Unable to truncate index file {}", self.path.display()))?;
        self.entries.clear();

        tracing::debug!("cleared index");
        Ok(())
    }
}
