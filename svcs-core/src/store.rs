//! Snapshot directories under `commits/`.
//!
//! Each commit is a directory named by its id holding flat, base-named
//! copies of the tracked files. Two known limitations are kept as-is:
//! a colliding id prefix overwrites the existing directory, and a copy
//! failure partway through leaves a partial snapshot behind.

use crate::error::{Error, Result};
use crate::hasher::ContentHasher;
use crate::models::{Commit, CommitId, Fingerprint, StoredFile};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct CommitStore {
    commits_dir: PathBuf,
    hasher: ContentHasher,
}

impl CommitStore {
    pub fn new(commits_dir: impl Into<PathBuf>) -> Self {
        Self {
            commits_dir: commits_dir.into(),
            hasher: ContentHasher::new(),
        }
    }

    /// Copies `files` into a directory named by the fingerprint's id.
    pub fn create<P: AsRef<Path>>(
        &self,
        fingerprint: &Fingerprint,
        files: &[P],
    ) -> Result<CommitId> {
        let id = fingerprint.commit_id();
        let commit_path = self.commits_dir.join(id.as_str());
        std::fs::create_dir_all(&commit_path).map_err(|e| Error::io(&commit_path, e))?;

        for src in files {
            let src = src.as_ref();
            let name = src
                .file_name()
                .ok_or_else(|| Error::FileNotFound(src.to_path_buf()))?;
            let dst = commit_path.join(name);
            std::fs::copy(src, &dst).map_err(|e| Error::io(src, e))?;
            debug!("Stored {:?} as {:?}", src, dst);
        }

        info!("Created commit {} ({} files)", id, files.len());
        Ok(id)
    }

    pub fn exists(&self, id: &CommitId) -> bool {
        Self::is_plain_id(id) && self.commits_dir.join(id.as_str()).is_dir()
    }

    /// Loads every stored file of commit `id`, sorted by name.
    pub fn read(&self, id: &CommitId) -> Result<Commit> {
        if !self.exists(id) {
            return Err(Error::CommitNotFound(id.to_string()));
        }

        let commit_path = self.commits_dir.join(id.as_str());
        let mut files = Vec::new();
        for path in Self::sorted_entries(&commit_path)? {
            if !path.is_file() {
                continue;
            }
            let content = std::fs::read(&path).map_err(|e| Error::io(&path, e))?;
            files.push(StoredFile {
                name: path
                    .file_name()
                    .map(OsStr::to_os_string)
                    .unwrap_or_default(),
                content,
            });
        }

        Ok(Commit {
            id: id.clone(),
            files,
        })
    }

    /// Ids of all snapshot directories in enumeration (name) order.
    pub fn ids(&self) -> Result<Vec<CommitId>> {
        if !self.commits_dir.is_dir() {
            return Ok(Vec::new());
        }

        Ok(Self::sorted_entries(&self.commits_dir)?
            .into_iter()
            .filter(|p| p.is_dir())
            .filter_map(|p| {
                p.file_name()
                    .map(|n| CommitId::new(n.to_string_lossy().into_owned()))
            })
            .collect())
    }

    /// Re-hashes every snapshot directory in enumeration order and returns
    /// the fingerprint of the last one that could be read. The stored files
    /// are hashed in name order, which only matches the tracked order by
    /// coincidence, so this answers "did anything change" on a best-effort
    /// basis and is not the fingerprint the commit was created with.
    pub fn latest_fingerprint(&self) -> Result<Option<Fingerprint>> {
        let mut latest = None;
        for id in self.ids()? {
            match self.read(&id) {
                Ok(commit) => {
                    latest = Some(
                        self.hasher
                            .fingerprint_bytes(commit.files.iter().map(|f| &f.content)),
                    );
                }
                Err(e) => warn!("Skipping unreadable commit {}: {}", id, e),
            }
        }
        Ok(latest)
    }

    /// Re-hashes commit `id` with its files ordered by `names` first; files
    /// not named there follow in name order.
    pub fn fingerprint_of(&self, id: &CommitId, names: &[OsString]) -> Result<Fingerprint> {
        let mut commit = self.read(id)?;
        commit.files.sort_by_key(|f| {
            names
                .iter()
                .position(|n| *n == f.name)
                .unwrap_or(names.len())
        });
        Ok(self
            .hasher
            .fingerprint_bytes(commit.files.iter().map(|f| &f.content)))
    }

    fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(dir)
            .map_err(|e| Error::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<PathBuf>>>()
            .map_err(|e| Error::io(dir, e))?;
        entries.sort();
        Ok(entries)
    }

    fn is_plain_id(id: &CommitId) -> bool {
        let id = id.as_str();
        !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        temp_dir: TempDir,
        store: CommitStore,
    }

    impl Fixture {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let store = CommitStore::new(temp_dir.path().join("commits"));
            std::fs::create_dir_all(temp_dir.path().join("commits")).unwrap();
            Self { temp_dir, store }
        }

        fn write(&self, rel: &str, content: &str) -> PathBuf {
            let path = self.temp_dir.path().join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, content).unwrap();
            path
        }
    }

    #[test]
    fn test_create_flattens_and_reads_back() {
        let fx = Fixture::new();
        let a = fx.write("a.txt", "hello");
        let b = fx.write("nested/dir/b.txt", "world");

        let fp = ContentHasher::new().fingerprint_files(&[&a, &b]).unwrap();
        let id = fx.store.create(&fp, &[&a, &b]).unwrap();

        assert_eq!(id.as_str(), "936a18");
        assert!(fx.temp_dir.path().join("commits/936a18/b.txt").is_file());

        let commit = fx.store.read(&id).unwrap();
        assert_eq!(commit.file_names(), vec!["a.txt", "b.txt"]);
        assert_eq!(commit.file("b.txt").unwrap().content, b"world");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_kept_exactly() {
        use std::os::unix::ffi::OsStrExt;

        let fx = Fixture::new();
        let name = OsStr::from_bytes(b"caf\xe9.txt");
        let src = fx.temp_dir.path().join(name);
        std::fs::write(&src, "bytes").unwrap();

        let fp = ContentHasher::new().fingerprint_files(&[&src]).unwrap();
        let id = fx.store.create(&fp, &[&src]).unwrap();

        let commit = fx.store.read(&id).unwrap();
        assert_eq!(commit.file_names(), vec![name]);
        assert_eq!(commit.file(name).unwrap().content, b"bytes");
    }

    #[test]
    fn test_snapshot_unaffected_by_later_edits() {
        let fx = Fixture::new();
        let a = fx.write("a.txt", "hello");

        let fp = ContentHasher::new().fingerprint_files(&[&a]).unwrap();
        let id = fx.store.create(&fp, &[&a]).unwrap();
        std::fs::write(&a, "changed").unwrap();

        assert_eq!(fx.store.read(&id).unwrap().files[0].content, b"hello");
    }

    #[test]
    fn test_read_unknown_or_malformed_id() {
        let fx = Fixture::new();

        for id in ["abcdef", "..", "../commits", ""] {
            let err = fx.store.read(&CommitId::from(id)).unwrap_err();
            assert!(matches!(err, Error::CommitNotFound(_)), "id {:?}", id);
        }
    }

    #[test]
    fn test_partial_snapshot_left_on_copy_failure() {
        let fx = Fixture::new();
        let a = fx.write("a.txt", "hello");
        let missing = fx.temp_dir.path().join("gone.txt");

        let fp = ContentHasher::new().fingerprint_bytes(["hello"]);
        let err = fx.store.create(&fp, &[a, missing]).unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Io);
        let partial = fx.store.read(&fp.commit_id()).unwrap();
        assert_eq!(partial.file_names(), vec!["a.txt"]);
    }

    #[test]
    fn test_colliding_id_overwrites_snapshot() {
        let fx = Fixture::new();
        let a = fx.write("a.txt", "first");
        let fp = ContentHasher::new().fingerprint_files(&[&a]).unwrap();
        fx.store.create(&fp, &[&a]).unwrap();

        std::fs::write(&a, "second").unwrap();
        let id = fx.store.create(&fp, &[&a]).unwrap();

        assert_eq!(fx.store.ids().unwrap(), vec![id.clone()]);
        assert_eq!(fx.store.read(&id).unwrap().files[0].content, b"second");
    }

    #[test]
    fn test_latest_fingerprint_uses_last_enumerated_directory() {
        let fx = Fixture::new();
        assert!(fx.store.latest_fingerprint().unwrap().is_none());

        let hasher = ContentHasher::new();
        let a = fx.write("a.txt", "HELLO");
        let fp_upper = hasher.fingerprint_files(&[&a]).unwrap();
        fx.store.create(&fp_upper, &[&a]).unwrap();
        assert_eq!(fx.store.latest_fingerprint().unwrap(), Some(fp_upper.clone()));

        // "hello" -> 2cf24d sorts before "HELLO" -> 3733cd, so enumeration
        // still ends at the older snapshot.
        std::fs::write(&a, "hello").unwrap();
        let fp_lower = hasher.fingerprint_files(&[&a]).unwrap();
        fx.store.create(&fp_lower, &[&a]).unwrap();

        assert_eq!(
            fx.store.ids().unwrap(),
            vec![CommitId::from("2cf24d"), CommitId::from("3733cd")]
        );
        assert_eq!(fx.store.latest_fingerprint().unwrap(), Some(fp_upper));
    }

    #[test]
    fn test_fingerprint_of_respects_name_order() {
        let fx = Fixture::new();
        let b = fx.write("b.txt", "world");
        let a = fx.write("a.txt", "hello");

        let hasher = ContentHasher::new();
        let tracked = hasher.fingerprint_files(&[&b, &a]).unwrap();
        let id = fx.store.create(&tracked, &[&b, &a]).unwrap();

        let names = vec![OsString::from("b.txt"), OsString::from("a.txt")];
        assert_eq!(fx.store.fingerprint_of(&id, &names).unwrap(), tracked);
        assert_ne!(fx.store.fingerprint_of(&id, &[]).unwrap(), tracked);
    }
}
