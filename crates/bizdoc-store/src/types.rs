use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document {0} not found")]
    NotFound(DocumentId),
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),
    #[error("No document ids left to allocate")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key of a stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kinds of business document the tool authors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Quotation,
    PurchaseOrder,
    TransactionStatement,
}

impl DocumentKind {
    /// Printed document title
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Quotation => "Quotation",
            DocumentKind::PurchaseOrder => "Purchase Order",
            DocumentKind::TransactionStatement => "Transaction Statement",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How fractional currency amounts become whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    #[default]
    Floor,
    Round,
    Ceil,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> i64 {
        // Absorb binary representation error (0.29 * 100 = 28.999...) first.
        let value = (value * 1_000_000.0).round() / 1_000_000.0;
        let rounded = match self {
            RoundingMode::Floor => value.floor(),
            RoundingMode::Round => value.round(),
            RoundingMode::Ceil => value.ceil(),
        };
        rounded as i64
    }
}
