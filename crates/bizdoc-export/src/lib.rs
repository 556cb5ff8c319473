//! PDF and spreadsheet export of paginated business documents

mod format;
mod options;
mod pdf;
mod plan;
mod spreadsheet;
mod types;

pub use format::{format_amount, format_quantity};
pub use options::ExportOptions;
pub use pdf::{generate_pdf, render_pdf_bytes};
pub use plan::paginate;
pub use spreadsheet::{export_csv, render_csv};
pub use types::*;
