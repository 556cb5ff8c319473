//! Persistence port for business documents
//!
//! Stores are keyed by [`DocumentId`]. Lookup by kind, client name and
//! update time is layered on top of `list` by [`search`].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::document::BusinessDocument;
use crate::types::*;

pub trait DocumentStore {
    fn get(&self, id: DocumentId) -> Result<Option<BusinessDocument>>;

    /// Insert or replace a document and stamp its update time.
    ///
    /// A document without an id is given the next free one.
    fn put(&mut self, document: BusinessDocument) -> Result<DocumentId>;

    /// Returns whether a document was removed
    fn delete(&mut self, id: DocumentId) -> Result<bool>;

    /// All documents in id order
    fn list(&self) -> Result<Vec<BusinessDocument>>;

    /// Insert documents as they are, keeping ids and update times.
    /// Documents without an id are given fresh ones.
    fn restore(&mut self, documents: Vec<BusinessDocument>) -> Result<usize>;

    fn require(&self, id: DocumentId) -> Result<BusinessDocument> {
        self.get(id)?.ok_or(StoreError::NotFound(id))
    }
}

/// Filter for [`search`]; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub kind: Option<DocumentKind>,
    /// Case-insensitive substring of the client name
    pub client_name: Option<String>,
}

impl DocumentQuery {
    pub fn matches(&self, document: &BusinessDocument) -> bool {
        if let Some(kind) = self.kind {
            if document.kind != kind {
                return false;
            }
        }
        if let Some(needle) = &self.client_name {
            let needle = needle.to_lowercase();
            if !document.client_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Matching documents, most recently updated first
pub fn search(store: &impl DocumentStore, query: &DocumentQuery) -> Result<Vec<BusinessDocument>> {
    let mut matches: Vec<BusinessDocument> = store
        .list()?
        .into_iter()
        .filter(|document| query.matches(document))
        .collect();
    matches.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
    Ok(matches)
}
