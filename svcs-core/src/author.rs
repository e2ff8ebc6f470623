use crate::error::{Error, Result};
use std::path::PathBuf;

/// Author name stored as raw bytes in `config.txt`, no trailing newline.
pub struct AuthorStore {
    path: PathBuf,
}

impl AuthorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn set(&self, name: &str) -> Result<()> {
        std::fs::write(&self.path, name.as_bytes()).map_err(|e| Error::io(&self.path, e))
    }

    /// Returns `None` when the file is missing or empty.
    pub fn get(&self) -> Result<Option<String>> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }

    pub fn require(&self) -> Result<String> {
        self.get()?.ok_or(Error::AuthorNotSet)
    }
}
