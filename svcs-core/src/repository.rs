use crate::author::AuthorStore;
use crate::checkout::CheckoutEngine;
use crate::config::RepoConfig;
use crate::error::{Error, Result};
use crate::hasher::ContentHasher;
use crate::history::HistoryLog;
use crate::models::{CommitId, Fingerprint, HistoryEntry};
use crate::registry::{TrackOutcome, TrackedFileRegistry};
use crate::store::CommitStore;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

/// One storage root plus the working area it snapshots.
pub struct Repository {
    config: RepoConfig,
    author: AuthorStore,
    registry: TrackedFileRegistry,
    hasher: ContentHasher,
    store: CommitStore,
    history: HistoryLog,
    checkout: CheckoutEngine,
}

impl Repository {
    /// Opens the repository, creating the storage layout on first use.
    pub fn open(config: RepoConfig) -> Result<Self> {
        config.ensure_layout()?;

        Ok(Self {
            author: AuthorStore::new(config.author_file()),
            registry: TrackedFileRegistry::new(config.index_file(), config.work_dir()),
            hasher: ContentHasher::new(),
            store: CommitStore::new(config.commits_dir()),
            history: HistoryLog::new(config.log_file()),
            checkout: CheckoutEngine::new(config.work_dir()),
            config,
        })
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    pub fn author(&self) -> Result<Option<String>> {
        self.author.get()
    }

    pub fn set_author(&self, name: &str) -> Result<()> {
        self.author.set(name)
    }

    pub fn track(&self, path: &Path) -> Result<TrackOutcome> {
        self.registry.track(path)
    }

    pub fn tracked(&self) -> Result<Vec<String>> {
        self.registry.paths()
    }

    pub fn store(&self) -> &CommitStore {
        &self.store
    }

    /// Snapshots the tracked files if their content differs from the most
    /// recent commit, then records the history entry.
    pub fn commit(&self, message: &str) -> Result<HistoryEntry> {
        let author = self.author.require()?;

        let paths = self.registry.resolved_paths()?;
        if paths.is_empty() {
            return Err(Error::NothingTracked);
        }

        let fingerprint = self.hasher.fingerprint_files(&paths)?;
        if self.last_fingerprint(&paths)?.as_ref() == Some(&fingerprint) {
            return Err(Error::NothingToCommit);
        }

        let id = self.store.create(&fingerprint, &paths)?;
        let entry = HistoryEntry::new(id, author, message);
        self.history.append(&entry)?;

        info!("Committed {} by {}", entry.id, entry.author);
        Ok(entry)
    }

    /// History blocks, most recent first.
    pub fn log(&self) -> Vec<String> {
        self.history.render()
    }

    /// Parsed history, most recent first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        let mut entries = self.history.entries();
        entries.reverse();
        entries
    }

    /// Overwrites working files with the contents stored under `id`.
    pub fn checkout(&self, id: &CommitId) -> Result<Vec<OsString>> {
        let commit = self.store.read(id)?;
        self.checkout.restore(&commit)
    }

    /// Fingerprint of the newest snapshot, re-hashed in the current tracked
    /// order. Falls back to the directory scan when the history does not
    /// name a snapshot that still exists.
    fn last_fingerprint(&self, paths: &[PathBuf]) -> Result<Option<Fingerprint>> {
        match self.history.latest() {
            Some(entry) if self.store.exists(&entry.id) => {
                let names: Vec<OsString> = paths
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| n.to_os_string())
                    .collect();
                self.store.fingerprint_of(&entry.id, &names).map(Some)
            }
            _ => self.store.latest_fingerprint(),
        }
    }
}
