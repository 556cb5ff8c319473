use bizdoc_layout::ContentRow;
use bizdoc_store::BusinessDocument;
use std::path::Path;

use crate::format::format_quantity;
use crate::options::ExportOptions;
use crate::plan::paginate;
use crate::types::{ExportError, Result};

const HEADER: [&str; 7] = ["page", "row", "name", "quantity", "unit", "unit_price", "amount"];

/// One CSV record per content row, tagged with the page it prints on.
///
/// Amounts stay plain integers so spreadsheets read them as numbers.
pub fn render_csv(document: &BusinessDocument, options: &ExportOptions) -> Result<String> {
    for warning in options.layout.validate()? {
        log::warn!("{}", warning);
    }

    let pages = paginate(document, &options.layout);
    let totals = document.totals();
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for (index, page) in pages.iter().enumerate() {
        let page_number = (index + 1).to_string();
        for row in &page.items {
            let amount = document.row_amount(row, &totals).to_string();
            let record = match row {
                ContentRow::Item(item) => [
                    page_number.clone(),
                    "item".to_string(),
                    item.name.clone(),
                    format_quantity(item.quantity),
                    item.unit.clone(),
                    item.unit_price.to_string(),
                    amount,
                ],
                summary => [
                    page_number.clone(),
                    row_label(summary).to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    amount,
                ],
            };
            writer.write_record(&record)?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn row_label<T>(row: &ContentRow<T>) -> &'static str {
    match row {
        ContentRow::Item(_) => "item",
        ContentRow::Subtotal => "subtotal",
        ContentRow::Vat => "vat",
        ContentRow::Total => "total",
    }
}

pub async fn export_csv(
    document: &BusinessDocument,
    options: &ExportOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let csv = render_csv(document, options)?;
    tokio::fs::write(output_path.as_ref(), csv).await?;
    log::info!("Wrote spreadsheet {}", output_path.as_ref().display());
    Ok(())
}
