use crate::layout::Page;
use crate::types::PaginationStatistics;

/// Calculate statistics for a computed page sequence
pub fn calculate_statistics<T>(pages: &[Page<T>]) -> PaginationStatistics {
    let rows_per_page: Vec<usize> = pages.iter().map(|page| page.items.len()).collect();

    let row_pages = pages.iter().filter(|page| page.has_rows()).count();
    let remarks_only_pages = pages.iter().filter(|page| page.is_remarks_only()).count();

    let total_rows = rows_per_page.iter().sum();
    let total_remarks_lines = pages.iter().map(|page| page.remarks_lines.len()).sum();

    PaginationStatistics {
        total_pages: pages.len(),
        row_pages,
        remarks_only_pages,
        total_rows,
        total_remarks_lines,
        rows_per_page,
    }
}
