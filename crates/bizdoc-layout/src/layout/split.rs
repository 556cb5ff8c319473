//! Two-phase greedy page splitter
//!
//! Phase 1 walks the rows once, closing a page whenever the next row would
//! eat into the space held back for remarks and the bottom reservations.
//! Phase 2 pours the remarks lines into what is left of the last row page
//! and spills the rest onto remarks-only continuation pages.

use super::{ContentRow, Page, remarks_line_capacity, split_remarks};
use crate::types::{PageGeometry, SectionHeights};

/// Rows collected for the page currently being filled
struct PageBucket<T> {
    items: Vec<ContentRow<T>>,
    is_first: bool,
    height_mm: f32,
}

impl<T> PageBucket<T> {
    fn first(sections: &SectionHeights) -> Self {
        Self {
            items: Vec::new(),
            is_first: true,
            height_mm: sections.first_page_baseline_mm(),
        }
    }

    fn continuation(sections: &SectionHeights) -> Self {
        Self {
            items: Vec::new(),
            is_first: false,
            height_mm: sections.continuation_baseline_mm(),
        }
    }

    fn push(&mut self, row: ContentRow<T>, cost_mm: f32) {
        self.items.push(row);
        self.height_mm += cost_mm;
    }

    fn close(self, remarks_lines: Vec<String>, is_last: bool, show_button: bool) -> Page<T> {
        Page {
            items: self.items,
            is_first: self.is_first,
            is_last,
            remarks_lines,
            show_button,
        }
    }
}

/// Split rows and remarks into an ordered page sequence.
///
/// Total over its inputs: degenerate configurations give overflowing or
/// fragmented pages, never an error. The first page produced is the only
/// one with `is_first`, the last the only one with `is_last`.
pub fn split_into_pages<T, I>(
    rows: I,
    remarks: &str,
    geometry: &PageGeometry,
    sections: &SectionHeights,
) -> Vec<Page<T>>
where
    I: IntoIterator<Item = ContentRow<T>>,
{
    let content_height = geometry.content_height_mm();
    let reserved_below = sections.min_remarks_reservation_mm() + sections.bottom_fixed_mm();

    let mut pages = Vec::new();
    let mut current = PageBucket::first(sections);

    for row in rows {
        let cost = sections.row_cost_mm(&row);
        let overflows = current.height_mm + cost + reserved_below > content_height;
        // An empty first page still closes so its header stays within
        // bounds. An empty continuation page keeps the row and overflows.
        if overflows && (current.is_first || !current.items.is_empty()) {
            pages.push(current.close(Vec::new(), false, false));
            current = PageBucket::continuation(sections);
        }
        current.push(row, cost);
    }

    place_remarks(&mut pages, current, split_remarks(remarks), content_height, sections);
    pages
}

fn place_remarks<T>(
    pages: &mut Vec<Page<T>>,
    last_row_page: PageBucket<T>,
    mut lines: Vec<String>,
    content_height: f32,
    sections: &SectionHeights,
) {
    let available = content_height
        - last_row_page.height_mm
        - sections.bottom_fixed_mm()
        - sections.remarks_base_mm;
    let capacity = remarks_line_capacity(available, sections.remarks_line_mm);

    if lines.len() <= capacity {
        pages.push(last_row_page.close(lines, true, true));
        return;
    }

    let overflow = lines.split_off(capacity);
    pages.push(last_row_page.close(lines, false, true));

    let per_page = remarks_line_capacity(
        content_height
            - sections.continuation_header_mm
            - sections.bottom_fixed_mm()
            - sections.remarks_base_mm,
        sections.remarks_line_mm,
    )
    .max(1);

    let mut overflow = overflow.into_iter().peekable();
    while overflow.peek().is_some() {
        let chunk: Vec<String> = overflow.by_ref().take(per_page).collect();
        let is_last = overflow.peek().is_none();
        pages.push(Page {
            items: Vec::new(),
            is_first: false,
            is_last,
            remarks_lines: chunk,
            show_button: is_last,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PaperSize};

    fn a4() -> PageGeometry {
        PageGeometry::new(PaperSize::A4, Orientation::Portrait, 10.0)
    }

    fn items(n: usize) -> Vec<ContentRow<usize>> {
        (0..n).map(ContentRow::Item).collect()
    }

    #[test]
    fn test_bucket_baselines() {
        let sections = SectionHeights::default();
        let first = PageBucket::<()>::first(&sections);
        let next = PageBucket::<()>::continuation(&sections);
        assert_eq!(first.height_mm, 70.0);
        assert_eq!(next.height_mm, 30.0);
        assert!(first.is_first);
        assert!(!next.is_first);
    }

    #[test]
    fn test_default_capacity_split() {
        // 70 + 8n + 30 + 20 <= 277 keeps 19 rows on the first page,
        // 30 + 8n + 30 + 20 <= 277 keeps up to 24 on the next.
        let pages = split_into_pages(items(30), "", &a4(), &SectionHeights::default());
        let counts: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(counts, vec![19, 11]);
        assert!(!pages[0].show_button);
        assert!(pages[1].show_button);
    }

    #[test]
    fn test_oversized_row_alone() {
        let sections = SectionHeights {
            item_row_mm: 500.0,
            ..SectionHeights::default()
        };
        let pages = split_into_pages(items(2), "", &a4(), &sections);
        let counts: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(counts, vec![0, 1, 1]);
        assert!(pages[0].is_first);
        assert_eq!(pages[1].items, vec![ContentRow::Item(0)]);
        assert_eq!(pages[2].items, vec![ContentRow::Item(1)]);
        assert!(pages[2].is_last);
    }

    #[test]
    fn test_zero_line_height_fragments() {
        let sections = SectionHeights {
            remarks_line_mm: 0.0,
            ..SectionHeights::default()
        };
        let pages = split_into_pages(Vec::<ContentRow<()>>::new(), "a\nb\nc", &a4(), &sections);
        assert_eq!(pages.len(), 4);
        assert!(pages[0].remarks_lines.is_empty());
        for page in &pages[1..] {
            assert_eq!(page.remarks_lines.len(), 1);
        }
        assert!(pages[3].is_last);
    }
}
