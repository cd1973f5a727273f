//! Write-through file persistence of the exported portfolio state.
//!
//! The stored document is exactly the import/export payload, so anything a
//! user exported can be dropped in as the state file and vice versa.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored payload, or `None` when no state has been saved yet.
    pub async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => Ok(Some(json)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(format!("reading {}", self.path.display())),
        }
    }

    pub async fn save(&self, json: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context(format!("creating {}", parent.display()))?;
            }
        }
        tokio::fs::write(&self.path, json)
            .await
            .context(format!("writing {}", self.path.display()))
    }
}
