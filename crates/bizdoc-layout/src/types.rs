use thiserror::Error;

use crate::constants::*;
use crate::layout::ContentRow;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

/// Named paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    /// JIS B5
    B5,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for named sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::B5 => (182.0, 257.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Physical page: paper, orientation and a uniform margin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    /// Applied to all four edges
    pub margin_mm: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

impl PageGeometry {
    pub fn new(paper_size: PaperSize, orientation: Orientation, margin_mm: f32) -> Self {
        Self {
            paper_size,
            orientation,
            margin_mm,
        }
    }

    /// (width, height) of the sheet after orientation
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }

    /// Usable height between top and bottom margins
    pub fn content_height_mm(&self) -> f32 {
        let (_, height) = self.page_dimensions_mm();
        height - 2.0 * self.margin_mm
    }

    /// Usable width between left and right margins
    pub fn content_width_mm(&self) -> f32 {
        let (width, _) = self.page_dimensions_mm();
        width - 2.0 * self.margin_mm
    }
}

/// Fixed millimeter cost of every structural region of a page.
///
/// These replace real measurement: a row costs the same whatever its text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionHeights {
    /// Header block on the first page
    pub first_header_mm: f32,
    /// Header block on every following page
    pub continuation_header_mm: f32,
    /// Column caption band, charged on every page holding rows
    pub table_header_mm: f32,
    /// One line-item row
    pub item_row_mm: f32,
    /// One subtotal / VAT / total row
    pub summary_row_mm: f32,
    /// Remarks label and padding
    pub remarks_base_mm: f32,
    /// One remarks line
    pub remarks_line_mm: f32,
    /// Trailing action-button reservation
    pub button_mm: f32,
    /// Page footer reservation
    pub footer_mm: f32,
}

impl Default for SectionHeights {
    fn default() -> Self {
        Self {
            first_header_mm: DEFAULT_FIRST_HEADER_MM,
            continuation_header_mm: DEFAULT_CONTINUATION_HEADER_MM,
            table_header_mm: DEFAULT_TABLE_HEADER_MM,
            item_row_mm: DEFAULT_ITEM_ROW_MM,
            summary_row_mm: DEFAULT_SUMMARY_ROW_MM,
            remarks_base_mm: DEFAULT_REMARKS_BASE_MM,
            remarks_line_mm: DEFAULT_REMARKS_LINE_MM,
            button_mm: DEFAULT_BUTTON_MM,
            footer_mm: DEFAULT_FOOTER_MM,
        }
    }
}

impl SectionHeights {
    /// Space kept free at the bottom of every page
    pub fn bottom_fixed_mm(&self) -> f32 {
        self.button_mm + self.footer_mm
    }

    /// Room for a one-line remarks fragment, held back on every row page
    pub fn min_remarks_reservation_mm(&self) -> f32 {
        self.remarks_base_mm + self.remarks_line_mm
    }

    /// Starting height of the first page's row area
    pub fn first_page_baseline_mm(&self) -> f32 {
        self.first_header_mm + self.table_header_mm
    }

    /// Starting height of a continuation page's row area
    pub fn continuation_baseline_mm(&self) -> f32 {
        self.continuation_header_mm + self.table_header_mm
    }

    pub fn row_cost_mm<T>(&self, row: &ContentRow<T>) -> f32 {
        if row.is_summary() {
            self.summary_row_mm
        } else {
            self.item_row_mm
        }
    }
}

/// Summary of a computed page sequence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationStatistics {
    /// Number of pages produced
    pub total_pages: usize,
    /// Pages carrying at least one content row
    pub row_pages: usize,
    /// Pages carrying remarks only
    pub remarks_only_pages: usize,
    /// Content rows across all pages
    pub total_rows: usize,
    /// Remarks lines across all pages
    pub total_remarks_lines: usize,
    /// Row count for each page, in order
    pub rows_per_page: Vec<usize>,
}
