use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{DocumentStore, MemoryStore};
use crate::document::BusinessDocument;
use crate::types::*;

/// On-disk layout of the store file
#[derive(Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    documents: Vec<BusinessDocument>,
}

/// A [`MemoryStore`] persisted to a single JSON file.
///
/// Changes stay in memory until [`flush`](Self::flush).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let inner = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file: StoreFile = serde_json::from_slice(&bytes)?;
                let mut inner = MemoryStore::new().with_next_id(file.next_id);
                inner.restore(file.documents)?;
                log::debug!("Opened store {} ({} documents)", path.display(), inner.len());
                inner
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Store {} does not exist yet, starting empty", path.display());
                MemoryStore::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are changes not yet written
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write pending changes to disk
    pub async fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let file = StoreFile {
            next_id: self.inner.next_id(),
            documents: self.inner.list()?,
        };
        let json = serde_json::to_vec_pretty(&file)?;
        tokio::fs::write(&self.path, json).await?;
        self.dirty = false;

        log::debug!("Flushed {} documents to {}", file.documents.len(), self.path.display());
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn get(&self, id: DocumentId) -> Result<Option<BusinessDocument>> {
        self.inner.get(id)
    }

    fn put(&mut self, document: BusinessDocument) -> Result<DocumentId> {
        let id = self.inner.put(document)?;
        self.dirty = true;
        Ok(id)
    }

    fn delete(&mut self, id: DocumentId) -> Result<bool> {
        let removed = self.inner.delete(id)?;
        self.dirty |= removed;
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<BusinessDocument>> {
        self.inner.list()
    }

    fn restore(&mut self, documents: Vec<BusinessDocument>) -> Result<usize> {
        let count = self.inner.restore(documents)?;
        self.dirty |= count > 0;
        Ok(count)
    }
}
