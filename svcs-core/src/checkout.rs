use crate::error::{Error, Result};
use crate::models::Commit;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

/// Writes a snapshot's files back into the working area.
///
/// Every stored file overwrites (or creates) the same base name in the
/// working area. Files the commit does not contain are left alone. There is
/// no staging: if a write fails, files restored earlier in the pass stay
/// restored.
pub struct CheckoutEngine {
    work_dir: PathBuf,
}

impl CheckoutEngine {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Returns the names written, in the commit's file order.
    pub fn restore(&self, commit: &Commit) -> Result<Vec<OsString>> {
        let mut restored = Vec::with_capacity(commit.files.len());

        for file in &commit.files {
            let dst = self.work_dir.join(&file.name);
            std::fs::write(&dst, &file.content).map_err(|e| Error::io(&dst, e))?;
            debug!("Restored {:?}", dst);
            restored.push(file.name.clone());
        }

        info!("Checked out {} ({} files)", commit.id, restored.len());
        Ok(restored)
    }
}
