use serde::Serialize;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Number of leading hex characters of a fingerprint used as the commit id.
pub const COMMIT_ID_LEN: usize = 6;

/// Hex-encoded SHA-256 over concatenated tracked-file contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn commit_id(&self) -> CommitId {
        CommitId(self.0[..COMMIT_ID_LEN].to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A file as stored inside a snapshot, keyed by base name. The name is kept
/// as the raw OS string so checkout writes back exactly the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub name: OsString,
    pub content: Vec<u8>,
}

/// Snapshot read back from the commit store.
#[derive(Debug, Clone)]
pub struct Commit {
    pub id: CommitId,
    pub files: Vec<StoredFile>,
}

impl Commit {
    pub fn file(&self, name: impl AsRef<OsStr>) -> Option<&StoredFile> {
        let name = name.as_ref();
        self.files.iter().find(|f| f.name.as_os_str() == name)
    }

    pub fn file_names(&self) -> Vec<&OsStr> {
        self.files.iter().map(|f| f.name.as_os_str()).collect()
    }
}

/// One block of the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: CommitId,
    pub author: String,
    pub message: String,
}

impl HistoryEntry {
    pub fn new(id: CommitId, author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            message: message.into(),
        }
    }

    /// Parses a block written by [`fmt::Display`]. The message is everything
    /// after the author line and may itself span several lines.
    pub fn parse(block: &str) -> Option<Self> {
        let (commit_line, rest) = block.split_once('\n')?;
        let id = commit_line.strip_prefix("commit ")?;
        let (author_line, message) = match rest.split_once('\n') {
            Some((author_line, message)) => (author_line, message),
            None => (rest, ""),
        };
        let author = author_line.strip_prefix("Author: ")?;

        Some(Self::new(CommitId::new(id), author, message))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commit {}\nAuthor: {}\n{}",
            self.id, self.author, self.message
        )
    }
}
