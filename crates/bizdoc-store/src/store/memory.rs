use chrono::Utc;
use std::collections::BTreeMap;

use super::DocumentStore;
use crate::document::BusinessDocument;
use crate::types::*;

/// Documents held in a map, ids allocated in increasing order
#[derive(Debug, Clone)]
pub struct MemoryStore {
    documents: BTreeMap<DocumentId, BusinessDocument>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            documents: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next new document will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Ids are never reused, even after a delete.
    pub(crate) fn with_next_id(mut self, next_id: u64) -> Self {
        self.next_id = self.next_id.max(next_id);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The counter saturates at `u64::MAX`; once that id is taken new
    /// documents are refused rather than overwriting it.
    fn assign_id(&mut self, document: &mut BusinessDocument) -> Result<DocumentId> {
        let id = match document.id {
            Some(id) => id,
            None => {
                let id = DocumentId(self.next_id);
                if self.documents.contains_key(&id) {
                    return Err(StoreError::IdsExhausted);
                }
                id
            }
        };
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        document.id = Some(id);
        Ok(id)
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, id: DocumentId) -> Result<Option<BusinessDocument>> {
        Ok(self.documents.get(&id).cloned())
    }

    fn put(&mut self, mut document: BusinessDocument) -> Result<DocumentId> {
        let id = self.assign_id(&mut document)?;
        document.updated_at = Utc::now();
        self.documents.insert(id, document);
        Ok(id)
    }

    fn delete(&mut self, id: DocumentId) -> Result<bool> {
        Ok(self.documents.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<BusinessDocument>> {
        Ok(self.documents.values().cloned().collect())
    }

    fn restore(&mut self, documents: Vec<BusinessDocument>) -> Result<usize> {
        let count = documents.len();
        for mut document in documents {
            let id = self.assign_id(&mut document)?;
            self.documents.insert(id, document);
        }
        Ok(count)
    }
}
