//! Shared constants for page geometry and section heights
//!
//! Every height here is a fixed capacity cost in millimeters. Rows are
//! assumed uniform regardless of their text length.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Uniform margin applied to all four edges (mm)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

// =============================================================================
// Section Heights
// =============================================================================

/// Title, parties and totals banner on the first page (mm)
pub const DEFAULT_FIRST_HEADER_MM: f32 = 60.0;

/// Compact header repeated on continuation pages (mm)
pub const DEFAULT_CONTINUATION_HEADER_MM: f32 = 20.0;

/// Column captions above the item table (mm)
pub const DEFAULT_TABLE_HEADER_MM: f32 = 10.0;

/// One line-item row (mm)
pub const DEFAULT_ITEM_ROW_MM: f32 = 8.0;

/// One subtotal / VAT / total row (mm)
pub const DEFAULT_SUMMARY_ROW_MM: f32 = 8.0;

/// Remarks label plus top padding (mm)
pub const DEFAULT_REMARKS_BASE_MM: f32 = 25.0;

/// One line of remarks text (mm)
pub const DEFAULT_REMARKS_LINE_MM: f32 = 5.0;

/// Space kept for the trailing action buttons (mm)
pub const DEFAULT_BUTTON_MM: f32 = 12.0;

/// Page footer (mm)
pub const DEFAULT_FOOTER_MM: f32 = 8.0;
