//! Data types flowing in and out of the splitter

/// One atomic unit of the item table.
///
/// A row is never split across pages. Summary rows follow the items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentRow<T> {
    /// Line item with an opaque payload
    Item(T),
    Subtotal,
    Vat,
    Total,
}

impl<T> ContentRow<T> {
    /// Items followed by the subtotal, VAT and total rows
    pub fn with_summary(items: impl IntoIterator<Item = T>) -> Vec<ContentRow<T>> {
        let mut rows: Vec<ContentRow<T>> = items.into_iter().map(ContentRow::Item).collect();
        rows.extend([ContentRow::Subtotal, ContentRow::Vat, ContentRow::Total]);
        rows
    }

    pub fn is_summary(&self) -> bool {
        !matches!(self, ContentRow::Item(_))
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            ContentRow::Item(payload) => Some(payload),
            _ => None,
        }
    }
}

/// One output page.
///
/// Pages are produced in order by a single call and never mutated
/// afterwards; a change to any input means recomputing the whole sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Contiguous slice of the input rows
    pub items: Vec<ContentRow<T>>,
    pub is_first: bool,
    pub is_last: bool,
    /// Contiguous slice of the remarks lines
    pub remarks_lines: Vec<String>,
    /// Whether the trailing action buttons belong on this page
    pub show_button: bool,
}

impl<T> Page<T> {
    /// A page created only to carry overflowing remarks
    pub fn is_remarks_only(&self) -> bool {
        self.items.is_empty() && !self.remarks_lines.is_empty()
    }

    pub fn has_rows(&self) -> bool {
        !self.items.is_empty()
    }
}
