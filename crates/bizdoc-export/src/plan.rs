use bizdoc_layout::{LayoutOptions, Page, calculate_statistics, split_into_pages};
use bizdoc_store::{BusinessDocument, LineItem};

/// Page plan for a document: its rows and remarks split under `layout`
pub fn paginate<'a>(
    document: &'a BusinessDocument,
    layout: &LayoutOptions,
) -> Vec<Page<&'a LineItem>> {
    let pages = split_into_pages(
        document.content_rows(),
        &document.remarks,
        &layout.geometry,
        &layout.sections,
    );

    let stats = calculate_statistics(&pages);
    log::debug!(
        "Paginated {} rows and {} remarks lines into {} pages ({} remarks-only)",
        stats.total_rows,
        stats.total_remarks_lines,
        stats.total_pages,
        stats.remarks_only_pages
    );

    pages
}
