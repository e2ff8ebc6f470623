//! Storage-root configuration.
//!
//! Every component receives the paths it needs from a [`RepoConfig`] at
//! construction time. The on-disk layout under the storage root is:
//!
//! ```text
//! vcs/
//!   config.txt   author name, raw bytes
//!   index.txt    tracked paths, one per line
//!   log.txt      history blocks separated by a blank line
//!   commits/
//!     <id>/      flattened copies of tracked files
//! ```

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_STORAGE_DIR: &str = "vcs";

const COMMITS_DIR: &str = "commits";
const AUTHOR_FILE: &str = "config.txt";
const INDEX_FILE: &str = "index.txt";
const LOG_FILE: &str = "log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    storage_root: PathBuf,
    work_dir: PathBuf,
}

impl RepoConfig {
    pub fn new(storage_root: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Storage root at `<work_dir>/vcs`.
    pub fn for_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        Self {
            storage_root: work_dir.join(DEFAULT_STORAGE_DIR),
            work_dir,
        }
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Directory checkouts are restored into.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn commits_dir(&self) -> PathBuf {
        self.storage_root.join(COMMITS_DIR)
    }

    pub fn author_file(&self) -> PathBuf {
        self.storage_root.join(AUTHOR_FILE)
    }

    pub fn index_file(&self) -> PathBuf {
        self.storage_root.join(INDEX_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.storage_root.join(LOG_FILE)
    }

    /// Creates the commits directory and the three bookkeeping files if
    /// they are missing. Existing files are left as they are.
    pub fn ensure_layout(&self) -> Result<()> {
        let commits = self.commits_dir();
        std::fs::create_dir_all(&commits).map_err(|e| Error::io(&commits, e))?;

        for file in [self.author_file(), self.index_file(), self.log_file()] {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file)
                .map_err(|e| Error::io(&file, e))?;
        }

        debug!("Storage layout ready at {:?}", self.storage_root);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let config = RepoConfig::for_work_dir("/work");

        assert_eq!(config.storage_root(), Path::new("/work/vcs"));
        assert_eq!(config.commits_dir(), PathBuf::from("/work/vcs/commits"));
        assert_eq!(config.author_file(), PathBuf::from("/work/vcs/config.txt"));
        assert_eq!(config.index_file(), PathBuf::from("/work/vcs/index.txt"));
        assert_eq!(config.log_file(), PathBuf::from("/work/vcs/log.txt"));
    }

    #[test]
    fn test_ensure_layout_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let config = RepoConfig::for_work_dir(temp_dir.path());

        config.ensure_layout().unwrap();
        assert!(config.commits_dir().is_dir());
        assert!(config.log_file().is_file());

        std::fs::write(config.author_file(), b"alice").unwrap();
        config.ensure_layout().unwrap();
        assert_eq!(std::fs::read(config.author_file()).unwrap(), b"alice");
    }
}
