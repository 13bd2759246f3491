//! Line-oriented text file source
//!
//! Treats every line of a UTF-8 text file as one item. The file is re-read on
//! each source operation; the paged collection's caches keep that to one read
//! per distinct quantity.

use super::AsyncPageSource;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

/// Deferred source reading items from a text file, one per line
#[derive(Debug, Clone)]
pub struct LineFileSource {
    path: PathBuf,
}

impl LineFileSource {
    /// Create a source for the file at `path`
    ///
    /// The file is not opened until the first source operation.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> Result<Lines<BufReader<File>>> {
        debug!("Reading lines from {}", self.path.display());
        let file = File::open(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: self.path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Ok(BufReader::new(file).lines())
    }
}

#[async_trait]
impl AsyncPageSource for LineFileSource {
    type Item = String;

    async fn count(&self) -> Result<usize> {
        let mut lines = self.open().await?;
        let mut count = 0;
        while lines.next_line().await?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    async fn slice(&self, offset: usize, limit: usize) -> Result<Vec<String>> {
        let mut lines = self.open().await?;
        let mut skipped = 0;
        let mut items = Vec::with_capacity(limit.min(1024));
        while items.len() < limit {
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if skipped < offset {
                skipped += 1;
            } else {
                items.push(line);
            }
        }
        Ok(items)
    }

    async fn materialize_all(&self) -> Result<Vec<String>> {
        let mut lines = self.open().await?;
        let mut items = Vec::new();
        while let Some(line) = lines.next_line().await? {
            items.push(line);
        }
        Ok(items)
    }
}
