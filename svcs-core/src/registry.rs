//! Tracked-file registry backed by `index.txt`.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Added,
    AlreadyTracked,
}

pub struct TrackedFileRegistry {
    index_file: PathBuf,
    work_dir: PathBuf,
}

impl TrackedFileRegistry {
    pub fn new(index_file: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            index_file: index_file.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Registers `path`, which must exist relative to the working area.
    /// The path is stored as given so that later commits read it relative
    /// to the same working area. The index is a text file, so paths that
    /// are not valid UTF-8 are refused rather than stored lossily.
    pub fn track(&self, path: &Path) -> Result<TrackOutcome> {
        if !self.resolve(path).exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let entry = path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?
            .to_string();
        if self.paths()?.iter().any(|p| *p == entry) {
            return Ok(TrackOutcome::AlreadyTracked);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.index_file)
            .map_err(|e| Error::io(&self.index_file, e))?;
        writeln!(file, "{}", entry).map_err(|e| Error::io(&self.index_file, e))?;

        info!("Tracking {}", entry);
        Ok(TrackOutcome::Added)
    }

    /// Tracked paths in registration order, exactly as written to the index.
    pub fn paths(&self) -> Result<Vec<String>> {
        let content = match std::fs::read_to_string(&self.index_file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.index_file, e)),
        };

        Ok(content
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Tracked paths joined onto the working area, ready to be read.
    pub fn resolved_paths(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .paths()?
            .iter()
            .map(|p| self.resolve(Path::new(p)))
            .collect())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.work_dir.join(path)
    }
}
