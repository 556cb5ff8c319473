//! Business documents and their persistence
//!
//! The document model (quotations, purchase orders, transaction
//! statements), totals, a persistence port with in-memory and JSON-file
//! implementations, and JSON backup import/export.

mod backup;
mod document;
pub mod store;
mod types;

pub use backup::{BACKUP_VERSION, Backup, export_backup, import_backup};
pub use document::*;
pub use store::{DocumentQuery, DocumentStore, JsonFileStore, MemoryStore, search};
pub use types::*;
