//! Flow layout: splitting rows and remarks into pages
//!
//! - Content rows and page descriptors
//! - Remarks line splitting and per-page line capacity
//! - The two-phase greedy splitter

mod remarks;
mod split;
mod types;

pub use remarks::*;
pub use split::*;
pub use types::*;
