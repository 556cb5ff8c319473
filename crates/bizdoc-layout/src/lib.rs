//! Ahead-of-time pagination for business documents
//!
//! Rows and remarks are distributed across pages from fixed millimeter
//! section heights; nothing is measured or reflowed.

pub mod constants;
pub mod layout;
mod options;
mod stats;
mod types;

pub use layout::{ContentRow, Page, remarks_line_capacity, split_into_pages, split_remarks};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
