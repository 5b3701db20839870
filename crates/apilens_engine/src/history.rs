use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Fixed file name shared by every run, placed in the platform temp
/// directory.
pub const HISTORY_FILE_NAME: &str = ".apilens";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Durable set of previously-submitted URLs.
#[async_trait::async_trait]
pub trait UrlStore: Send + Sync {
    /// Records a URL. Idempotent: re-adding an existing URL is a valid,
    /// non-failing call that leaves the stored set unchanged.
    async fn save(&self, url: &str) -> Result<(), HistoryError>;
    /// Stored URLs in ascending lexicographic order; empty when no file
    /// exists yet.
    async fn load(&self) -> Result<Vec<String>, HistoryError>;
}

/// Plain-text store: one URL per line, sorted, deduplicated on every write.
///
/// Writers follow read-modify-write over the whole file with no cross-process
/// locking; concurrent processes racing on the same file lose to the last
/// writer.
#[derive(Debug, Clone)]
pub struct TempFileStorage {
    dir: PathBuf,
}

impl Default for TempFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TempFileStorage {
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    /// Store rooted in an explicit directory instead of the platform temp
    /// dir.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE_NAME)
    }

    fn read_set(&self) -> BTreeSet<String> {
        match fs::read_to_string(self.path()) {
            Ok(content) => content
                .lines()
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            Err(_) => BTreeSet::new(),
        }
    }

    /// Rewrites the backing file as the joined set, via a temp file and
    /// rename so readers never observe a half-written list.
    fn write_set(&self, set: &BTreeSet<String>) -> Result<(), HistoryError> {
        let content = set.iter().cloned().collect::<Vec<_>>().join("\n");
        let target = self.path();
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| HistoryError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UrlStore for TempFileStorage {
    async fn save(&self, url: &str) -> Result<(), HistoryError> {
        let mut set = self.read_set();
        set.insert(url.to_string());
        self.write_set(&set)
    }

    async fn load(&self) -> Result<Vec<String>, HistoryError> {
        Ok(self.read_set().into_iter().collect())
    }
}
