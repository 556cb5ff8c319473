use bizdoc_layout::constants::{mm_to_pt, pt_to_mm};
use bizdoc_layout::{ContentRow, Page};
use bizdoc_store::{BusinessDocument, LineItem, Totals};
use printpdf::*;
use std::path::Path;

use crate::format::{format_amount, format_quantity};
use crate::options::ExportOptions;
use crate::plan::paginate;
use crate::types::Result;

/// Column start positions as fractions of the content width
const COLUMNS: [(&str, f32); 5] = [
    ("Item", 0.0),
    ("Qty", 0.48),
    ("Unit", 0.58),
    ("Unit price", 0.68),
    ("Amount", 0.84),
];

pub async fn generate_pdf(
    document: &BusinessDocument,
    options: &ExportOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let document = document.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || render_pdf_bytes(&document, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote PDF {}", output_path.display());

    Ok(())
}

/// Draw every page of the computed plan.
///
/// Vertical positions come from the same section heights the splitter
/// charged, so each region lands where its capacity was reserved.
pub fn render_pdf_bytes(document: &BusinessDocument, options: &ExportOptions) -> Result<Vec<u8>> {
    for warning in options.layout.validate()? {
        log::warn!("{}", warning);
    }

    let pages = paginate(document, &options.layout);
    let geometry = &options.layout.geometry;
    let (width_mm, height_mm) = geometry.page_dimensions_mm();

    let title = if document.number.is_empty() {
        document.kind.title().to_string()
    } else {
        format!("{} {}", document.kind.title(), document.number)
    };
    let mut doc = PdfDocument::new(&title);

    let totals = document.totals();
    let page_count = pages.len();
    let mut pdf_pages = Vec::with_capacity(page_count);
    for (index, page) in pages.iter().enumerate() {
        let mut writer = PageWriter::new(options, totals, height_mm);
        writer.draw_page(document, page, index + 1, page_count);
        pdf_pages.push(PdfPage::new(Mm(width_mm), Mm(height_mm), writer.ops));
    }
    doc.pages = pdf_pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Accumulates drawing ops for one page, tracking how far down the
/// content area the next region starts.
struct PageWriter<'a> {
    options: &'a ExportOptions,
    totals: Totals,
    ops: Vec<Op>,
    /// Top edge of the content area, measured from the bottom of the sheet
    top_mm: f32,
    left_mm: f32,
    content_width_mm: f32,
    content_height_mm: f32,
    /// Height already used from the top of the content area
    cursor_mm: f32,
}

impl<'a> PageWriter<'a> {
    fn new(options: &'a ExportOptions, totals: Totals, page_height_mm: f32) -> Self {
        let geometry = &options.layout.geometry;
        Self {
            options,
            totals,
            ops: Vec::new(),
            top_mm: page_height_mm - geometry.margin_mm,
            left_mm: geometry.margin_mm,
            content_width_mm: geometry.content_width_mm(),
            content_height_mm: geometry.content_height_mm(),
            cursor_mm: 0.0,
        }
    }

    fn draw_page(
        &mut self,
        document: &BusinessDocument,
        page: &Page<&LineItem>,
        page_number: usize,
        page_count: usize,
    ) {
        let sections = self.options.layout.sections;

        if page.is_first {
            self.draw_first_header(document, sections.first_header_mm);
        } else {
            self.draw_continuation_header(document, sections.continuation_header_mm);
        }

        if page.has_rows() {
            self.draw_table_header(sections.table_header_mm);
            for row in &page.items {
                let height = sections.row_cost_mm(row);
                self.draw_row(document, row, height);
            }
        }

        if !page.remarks_lines.is_empty() {
            self.band_text(0.0, sections.remarks_base_mm, "Remarks", self.font_size());
            self.cursor_mm += sections.remarks_base_mm;
            for line in &page.remarks_lines {
                self.band_text(0.0, sections.remarks_line_mm, line, self.font_size());
                self.cursor_mm += sections.remarks_line_mm;
            }
        }

        // Bottom reservations are anchored to the end of the content area.
        self.cursor_mm = self.content_height_mm - sections.bottom_fixed_mm();
        if !page.is_last {
            self.band_text(0.0, sections.button_mm, "Continued on next page", self.font_size());
        }
        self.cursor_mm += sections.button_mm;
        let footer = format!("Page {} / {}", page_number, page_count);
        self.band_text(
            self.content_width_mm * 0.84,
            sections.footer_mm,
            &footer,
            self.font_size() * 0.8,
        );
    }

    fn draw_first_header(&mut self, document: &BusinessDocument, height_mm: f32) {
        let size = self.font_size();
        let start = self.cursor_mm;
        let line_mm = height_mm / 6.0;

        self.band_text(0.0, line_mm * 1.5, document.kind.title(), size * 1.8);
        self.cursor_mm += line_mm * 1.5;

        if !document.number.is_empty() {
            let number = format!("No. {}", document.number);
            self.band_text(self.content_width_mm * 0.6, line_mm, &number, size);
        }
        let client = format!("To: {}", document.client_name);
        self.band_text(0.0, line_mm, &client, size * 1.2);
        self.cursor_mm += line_mm;

        let date = format!("Date: {}", document.issue_date.format("%Y-%m-%d"));
        self.band_text(self.content_width_mm * 0.6, line_mm, &date, size);
        if !document.title.is_empty() {
            let subject = format!("Subject: {}", document.title);
            self.band_text(0.0, line_mm, &subject, size);
        }
        self.cursor_mm += line_mm;

        let total = format!(
            "Total: {}{}",
            self.options.currency_prefix,
            format_amount(self.totals.total)
        );
        self.band_text(0.0, line_mm * 1.5, &total, size * 1.4);

        self.cursor_mm = start + height_mm;
    }

    fn draw_continuation_header(&mut self, document: &BusinessDocument, height_mm: f32) {
        let heading = if document.number.is_empty() {
            format!("{} (continued)", document.kind.title())
        } else {
            format!("{} {} (continued)", document.kind.title(), document.number)
        };
        self.band_text(0.0, height_mm, &heading, self.font_size());
        self.cursor_mm += height_mm;
    }

    fn draw_table_header(&mut self, height_mm: f32) {
        for (caption, offset) in COLUMNS {
            self.band_text(self.content_width_mm * offset, height_mm, caption, self.font_size());
        }
        self.cursor_mm += height_mm;
    }

    fn draw_row(
        &mut self,
        document: &BusinessDocument,
        row: &ContentRow<&LineItem>,
        height_mm: f32,
    ) {
        let amount = format!(
            "{}{}",
            self.options.currency_prefix,
            format_amount(document.row_amount(row, &self.totals))
        );
        let cells: Vec<(f32, String)> = match row {
            ContentRow::Item(item) => vec![
                (COLUMNS[0].1, item.name.clone()),
                (COLUMNS[1].1, format_quantity(item.quantity)),
                (COLUMNS[2].1, item.unit.clone()),
                (COLUMNS[3].1, format_amount(item.unit_price)),
                (COLUMNS[4].1, amount),
            ],
            ContentRow::Subtotal => {
                vec![(COLUMNS[3].1, "Subtotal".to_string()), (COLUMNS[4].1, amount)]
            }
            ContentRow::Vat => {
                let label = format!("VAT ({}%)", document.tax_rate_percent);
                vec![(COLUMNS[3].1, label), (COLUMNS[4].1, amount)]
            }
            ContentRow::Total => vec![(COLUMNS[3].1, "Total".to_string()), (COLUMNS[4].1, amount)],
        };

        for (offset, text) in cells {
            self.band_text(self.content_width_mm * offset, height_mm, &text, self.font_size());
        }
        self.cursor_mm += height_mm;
    }

    fn font_size(&self) -> f32 {
        self.options.font_size_pt
    }

    /// Write text vertically centered in a band starting at the cursor
    fn band_text(&mut self, x_offset_mm: f32, band_mm: f32, text: &str, size_pt: f32) {
        if text.is_empty() {
            return;
        }
        let glyph_mm = pt_to_mm(size_pt);
        let baseline_mm = self.top_mm - self.cursor_mm - (band_mm + glyph_mm * 0.7) / 2.0;

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: Pt(mm_to_pt(self.left_mm + x_offset_mm)),
                y: Pt(mm_to_pt(baseline_mm)),
            },
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(size_pt),
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        });
        self.ops.push(Op::EndTextSection);
    }
}
