//! JSON backup of a whole document collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::BusinessDocument;
use crate::types::*;

/// Format version written by [`export_backup`]
pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub documents: Vec<BusinessDocument>,
}

#[derive(Serialize)]
struct BackupRef<'a> {
    version: u32,
    exported_at: DateTime<Utc>,
    documents: &'a [BusinessDocument],
}

/// Serialize documents into a versioned backup
pub fn export_backup(documents: &[BusinessDocument]) -> Result<String> {
    let backup = BackupRef {
        version: BACKUP_VERSION,
        exported_at: Utc::now(),
        documents,
    };
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Parse a backup, rejecting malformed files and unknown versions
pub fn import_backup(json: &str) -> Result<Vec<BusinessDocument>> {
    let backup: Backup = serde_json::from_str(json)
        .map_err(|e| StoreError::InvalidBackup(format!("Failed to parse backup: {}", e)))?;

    if backup.version != BACKUP_VERSION {
        return Err(StoreError::InvalidBackup(format!(
            "Unsupported backup version {} (expected {})",
            backup.version, BACKUP_VERSION
        )));
    }

    log::info!(
        "Read backup from {} with {} documents",
        backup.exported_at,
        backup.documents.len()
    );
    Ok(backup.documents)
}
