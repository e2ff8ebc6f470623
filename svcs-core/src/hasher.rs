//! Content fingerprints.
//!
//! A fingerprint is SHA-256 over the raw concatenation of file contents in
//! the order given. No separator is written between files, so
//! `["ab", "c"]` and `["a", "bc"]` hash the same.

use crate::error::{Error, Result};
use crate::models::Fingerprint;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct ContentHasher;

impl ContentHasher {
    pub fn new() -> Self {
        Self
    }

    /// Reads each path fresh and hashes the contents in order.
    pub fn fingerprint_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Fingerprint> {
        let mut hasher = Sha256::new();
        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
            hasher.update(&content);
        }
        Ok(Fingerprint::from_digest(hex::encode(hasher.finalize())))
    }

    pub fn fingerprint_bytes<I, B>(&self, contents: I) -> Fingerprint
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut hasher = Sha256::new();
        for content in contents {
            hasher.update(content.as_ref());
        }
        Fingerprint::from_digest(hex::encode(hasher.finalize()))
    }
}
