use bizdoc_export::*;
use bizdoc_layout::{LayoutOptions, SectionHeights};
use bizdoc_store::{BusinessDocument, DocumentKind, LineItem};
use chrono::NaiveDate;

fn quotation(item_count: usize, remarks_lines: usize) -> BusinessDocument {
    let mut doc = BusinessDocument::new(
        DocumentKind::Quotation,
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
    );
    doc.number = "Q-2026-014".to_string();
    doc.client_name = "Acme Corp".to_string();
    doc.title = "Office renovation".to_string();
    for i in 0..item_count {
        doc.items
            .push(LineItem::new(format!("Work package {}", i + 1), 2.0, "day", 45_000));
    }
    doc.remarks = (1..=remarks_lines)
        .map(|i| format!("Condition {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    doc
}

fn pdf_page_count(bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    doc.get_pages().len()
}

#[test]
fn test_paginate_matches_row_order() {
    let doc = quotation(40, 3);
    let pages = paginate(&doc, &LayoutOptions::default());

    let names: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.items.iter())
        .filter_map(|row| row.item().map(|item| item.name.as_str()))
        .collect();
    let expected: Vec<&str> = doc.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, expected);
    assert!(pages.len() >= 2);
}

#[test]
fn test_pdf_has_one_page_per_plan_page() {
    let doc = quotation(40, 60);
    let options = ExportOptions::default();
    let plan = paginate(&doc, &options.layout);

    let bytes = render_pdf_bytes(&doc, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(pdf_page_count(&bytes), plan.len());
}

#[test]
fn test_pdf_single_page_document() {
    let doc = quotation(2, 1);
    let bytes = render_pdf_bytes(&doc, &ExportOptions::default()).unwrap();
    assert_eq!(pdf_page_count(&bytes), 1);
}

#[test]
fn test_pdf_rejects_unusable_geometry() {
    let doc = quotation(2, 0);
    let mut options = ExportOptions::default();
    options.layout.geometry.margin_mm = 200.0;
    assert!(matches!(
        render_pdf_bytes(&doc, &options),
        Err(ExportError::Layout(_))
    ));
}

#[test]
fn test_csv_rejects_unusable_geometry() {
    let doc = quotation(2, 0);
    let mut options = ExportOptions::default();
    options.layout.geometry.margin_mm = 200.0;
    assert!(matches!(
        render_csv(&doc, &options),
        Err(ExportError::Layout(_))
    ));
}

#[test]
fn test_csv_rows_carry_page_numbers() {
    let doc = quotation(30, 0);
    let csv = render_csv(&doc, &ExportOptions::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "page,row,name,quantity,unit,unit_price,amount");
    assert_eq!(lines[1], "1,item,Work package 1,2,day,45000,90000");
    // 30 items + 3 summary rows + header
    assert_eq!(lines.len(), 34);
    assert!(lines[20].starts_with("2,item,Work package 20,"));
    assert_eq!(lines[31], "2,subtotal,,,,,2700000");
    assert_eq!(lines[32], "2,vat,,,,,270000");
    assert_eq!(lines[33], "2,total,,,,,2970000");
}

#[test]
fn test_csv_summary_cost_moves_totals() {
    let doc = quotation(19, 0);
    let mut options = ExportOptions::default();
    options.layout.sections = SectionHeights {
        summary_row_mm: 30.0,
        ..SectionHeights::default()
    };
    let csv = render_csv(&doc, &options).unwrap();
    let last = csv.lines().last().unwrap();
    assert_eq!(last, "2,total,,,,,1881000");
}

#[tokio::test]
async fn test_write_files() {
    let dir = tempfile::tempdir().unwrap();
    let pdf_path = dir.path().join("quote.pdf");
    let csv_path = dir.path().join("quote.csv");
    let doc = quotation(5, 2);
    let options = ExportOptions::default();

    generate_pdf(&doc, &options, &pdf_path).await.unwrap();
    export_csv(&doc, &options, &csv_path).await.unwrap();

    let pdf = std::fs::read(&pdf_path).unwrap();
    assert_eq!(pdf_page_count(&pdf), 1);
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 9);
}
