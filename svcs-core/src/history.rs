//! Append-only commit history in `log.txt`.
//!
//! Each entry is written as `commit <id>\nAuthor: <author>\n<message>`
//! followed by a blank line. Nothing is ever rewritten.

use crate::error::{Error, Result};
use crate::models::HistoryEntry;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

const BLOCK_SEPARATOR: &str = "\n\n";

pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        write!(file, "{}{}", entry, BLOCK_SEPARATOR).map_err(|e| Error::io(&self.path, e))?;

        debug!("Appended history entry for {}", entry.id);
        Ok(())
    }

    /// Raw blocks, most recent first. Empty when nothing was ever committed
    /// or the log cannot be read.
    pub fn render(&self) -> Vec<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("History not readable: {}", e);
                return Vec::new();
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed
            .rsplit(BLOCK_SEPARATOR)
            .map(str::to_string)
            .collect()
    }

    /// Parsed entries in creation order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let mut blocks = self.render();
        blocks.reverse();
        blocks
            .iter()
            .filter_map(|block| HistoryEntry::parse(block))
            .collect()
    }

    pub fn latest(&self) -> Option<HistoryEntry> {
        self.render()
            .iter()
            .find_map(|block| HistoryEntry::parse(block))
    }
}
