use bizdoc_layout::*;

#[test]
fn test_stats_single_page() {
    let pages = split_into_pages(
        ContentRow::with_summary(0..3),
        "Note",
        &PageGeometry::default(),
        &SectionHeights::default(),
    );
    let stats = calculate_statistics(&pages);

    assert_eq!(stats.total_pages, 1);
    assert_eq!(stats.row_pages, 1);
    assert_eq!(stats.remarks_only_pages, 0);
    assert_eq!(stats.total_rows, 6);
    assert_eq!(stats.total_remarks_lines, 1);
    assert_eq!(stats.rows_per_page, vec![6]);
}

#[test]
fn test_stats_rows_and_remarks_pages() {
    let remarks = (0..100)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let pages = split_into_pages(
        ContentRow::with_summary(0..30),
        &remarks,
        &PageGeometry::default(),
        &SectionHeights::default(),
    );
    let stats = calculate_statistics(&pages);

    assert_eq!(stats.total_pages, pages.len());
    assert_eq!(stats.total_rows, 33);
    assert_eq!(stats.total_remarks_lines, 100);
    assert_eq!(stats.row_pages + stats.remarks_only_pages, stats.total_pages);
    assert!(stats.remarks_only_pages >= 1);
    assert_eq!(stats.rows_per_page.iter().sum::<usize>(), 33);
}

#[test]
fn test_stats_empty_document() {
    let pages = split_into_pages(
        Vec::<ContentRow<()>>::new(),
        "",
        &PageGeometry::default(),
        &SectionHeights::default(),
    );
    let stats = calculate_statistics(&pages);

    assert_eq!(stats.total_pages, 1);
    assert_eq!(stats.row_pages, 0);
    assert_eq!(stats.remarks_only_pages, 0);
    assert_eq!(stats.rows_per_page, vec![0]);
}
