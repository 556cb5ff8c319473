use bizdoc_layout::ContentRow;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, DocumentKind, RoundingMode};

/// Default consumption tax rate in percent
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 10.0;

fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE_PERCENT
}

/// One line of the item table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    /// Whole currency units
    pub unit_price: i64,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: i64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            unit_price,
        }
    }

    pub fn amount(&self, rounding: RoundingMode) -> i64 {
        rounding.apply(self.quantity * self.unit_price as f64)
    }
}

/// Subtotal, tax and grand total in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: i64,
    pub vat: i64,
    pub total: i64,
}

/// A quotation, purchase order or transaction statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDocument {
    /// Assigned by the store on first `put`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub kind: DocumentKind,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,
    #[serde(default)]
    pub rounding: RoundingMode,
    #[serde(default)]
    pub remarks: String,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BusinessDocument {
    pub fn new(kind: DocumentKind, issue_date: NaiveDate) -> Self {
        Self {
            id: None,
            kind,
            number: String::new(),
            title: String::new(),
            client_name: String::new(),
            issue_date,
            items: Vec::new(),
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            rounding: RoundingMode::default(),
            remarks: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Tax is computed once on the subtotal, not per line.
    pub fn totals(&self) -> Totals {
        let subtotal: i64 = self.items.iter().map(|item| item.amount(self.rounding)).sum();
        let vat = self
            .rounding
            .apply(subtotal as f64 * self.tax_rate_percent / 100.0);
        Totals {
            subtotal,
            vat,
            total: subtotal + vat,
        }
    }

    /// Line items followed by the subtotal, VAT and total rows
    pub fn content_rows(&self) -> Vec<ContentRow<&LineItem>> {
        ContentRow::with_summary(self.items.iter())
    }

    /// Amount printed in the amount column for a row, with `totals` from
    /// [`BusinessDocument::totals`] computed once per rendering
    pub fn row_amount(&self, row: &ContentRow<&LineItem>, totals: &Totals) -> i64 {
        match row {
            ContentRow::Item(item) => item.amount(self.rounding),
            ContentRow::Subtotal => totals.subtotal,
            ContentRow::Vat => totals.vat,
            ContentRow::Total => totals.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    #[test]
    fn test_totals_floor() {
        let mut doc = BusinessDocument::new(DocumentKind::Quotation, date());
        doc.items.push(LineItem::new("Consulting", 1.5, "h", 9_999));
        doc.items.push(LineItem::new("Travel", 1.0, "", 12_345));

        // 14998.5 floors to 14998
        let totals = doc.totals();
        assert_eq!(totals.subtotal, 14_998 + 12_345);
        assert_eq!(totals.vat, 2_734);
        assert_eq!(totals.total, 27_343 + 2_734);
    }

    #[test]
    fn test_rounding_modes() {
        assert_eq!(RoundingMode::Floor.apply(10.5), 10);
        assert_eq!(RoundingMode::Round.apply(10.5), 11);
        assert_eq!(RoundingMode::Ceil.apply(10.1), 11);
        assert_eq!(RoundingMode::Floor.apply(0.29 * 100.0), 29);
    }

    #[test]
    fn test_content_rows_end_with_summary() {
        let mut doc = BusinessDocument::new(DocumentKind::PurchaseOrder, date());
        doc.items.push(LineItem::new("Bolt", 100.0, "pcs", 12));
        let rows = doc.content_rows();
        let totals = doc.totals();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ContentRow::Item(&doc.items[0]));
        assert_eq!(rows[3], ContentRow::Total);
        assert_eq!(doc.row_amount(&rows[0], &totals), 1_200);
        assert_eq!(doc.row_amount(&rows[2], &totals), 120);
        assert_eq!(doc.row_amount(&rows[3], &totals), 1_320);
    }
}
