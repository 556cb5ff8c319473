mod logger;

use anyhow::{Context, Result};
use bizdoc_layout::{LayoutOptions, calculate_statistics};
use bizdoc_store::{
    BusinessDocument, DocumentId, DocumentKind, DocumentQuery, DocumentStore, JsonFileStore,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bizdoc", about = "Business document pagination and export", version)]
struct Cli {
    /// Document store file
    #[arg(long, global = true, default_value = "bizdoc-store.json")]
    store: PathBuf,

    /// Layout options JSON (geometry and section heights)
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Override paper size
    #[arg(long, global = true, value_enum)]
    paper: Option<PaperArg>,

    /// Override orientation
    #[arg(long, global = true, value_enum)]
    orientation: Option<OrientationArg>,

    /// Override page margin in mm (uniform on all sides)
    #[arg(long, global = true)]
    margin: Option<f32>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a document from a JSON file
    Add {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List documents, most recently updated first
    List {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Case-insensitive part of the client name
        #[arg(long)]
        client: Option<String>,
    },

    /// Print a document as JSON
    Show {
        #[arg(long)]
        id: u64,
    },

    /// Delete a document
    Delete {
        #[arg(long)]
        id: u64,
    },

    /// Show how a document splits into pages
    Paginate {
        #[arg(long)]
        id: u64,

        /// Print the page plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a document to PDF
    ExportPdf {
        #[arg(long)]
        id: u64,

        #[arg(short, long)]
        output: PathBuf,

        /// Base font size in points
        #[arg(long, default_value = "10.0")]
        font_size: f32,

        /// Printed before amounts
        #[arg(long)]
        currency: Option<String>,
    },

    /// Export a document's rows to CSV
    ExportCsv {
        #[arg(long)]
        id: u64,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write all documents to a JSON backup
    Backup {
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Load documents from a JSON backup
    Restore {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Write the effective layout options to a JSON file
    InitLayout {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    B5,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum KindArg {
    Quotation,
    PurchaseOrder,
    TransactionStatement,
}

impl From<PaperArg> for bizdoc_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::B5 => Self::B5,
        }
    }
}

impl From<OrientationArg> for bizdoc_layout::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<KindArg> for DocumentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Quotation => Self::Quotation,
            KindArg::PurchaseOrder => Self::PurchaseOrder,
            KindArg::TransactionStatement => Self::TransactionStatement,
        }
    }
}

/// Layout file (or defaults) with command-line overrides applied
async fn resolve_layout(cli: &Cli) -> Result<LayoutOptions> {
    let mut layout = match &cli.layout {
        Some(path) => LayoutOptions::load(path)
            .await
            .with_context(|| format!("Failed to load layout options from {}", path.display()))?,
        None => LayoutOptions::default(),
    };

    if let Some(paper) = cli.paper {
        layout.geometry.paper_size = paper.into();
    }
    if let Some(orientation) = cli.orientation {
        layout.geometry.orientation = orientation.into();
    }
    if let Some(margin) = cli.margin {
        layout.geometry.margin_mm = margin;
    }

    for warning in layout.validate()? {
        log::warn!("{}", warning);
    }
    Ok(layout)
}

fn describe(document: &BusinessDocument) -> String {
    let id = document
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<5} {:<22} {:<14} {:<24} {:>14}  {}",
        id,
        document.kind.title(),
        document.number,
        document.client_name,
        bizdoc_export::format_amount(document.totals().total),
        document.updated_at.format("%Y-%m-%d %H:%M")
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::StderrLogger::new(logger::level_for_verbosity(cli.verbose))
        .init()
        .context("Failed to install logger")?;

    let mut store = JsonFileStore::open(&cli.store)
        .await
        .with_context(|| format!("Failed to open store {}", cli.store.display()))?;

    match &cli.command {
        Commands::Add { input } => {
            let json = tokio::fs::read_to_string(input).await?;
            let document: BusinessDocument = serde_json::from_str(&json)
                .with_context(|| format!("Invalid document in {}", input.display()))?;
            let id = store.put(document)?;
            store.flush().await?;
            println!("Added document {}", id);
        }

        Commands::List { kind, client } => {
            let query = DocumentQuery {
                kind: kind.map(Into::into),
                client_name: client.clone(),
            };
            let documents = bizdoc_store::search(&store, &query)?;
            for document in &documents {
                println!("{}", describe(document));
            }
            log::info!("{} documents listed", documents.len());
        }

        Commands::Show { id } => {
            let document = store.require(DocumentId(*id))?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }

        Commands::Delete { id } => {
            if store.delete(DocumentId(*id))? {
                store.flush().await?;
                println!("Deleted document {}", DocumentId(*id));
            } else {
                anyhow::bail!("Document {} not found", DocumentId(*id));
            }
        }

        Commands::Paginate { id, json } => {
            let layout = resolve_layout(&cli).await?;
            let document = store.require(DocumentId(*id))?;
            let pages = bizdoc_export::paginate(&document, &layout);

            if *json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
                return Ok(());
            }

            for (index, page) in pages.iter().enumerate() {
                let mut flags = Vec::new();
                if page.is_first {
                    flags.push("first");
                }
                if page.is_last {
                    flags.push("last");
                }
                if page.is_remarks_only() {
                    flags.push("remarks only");
                }
                println!(
                    "Page {}: {} rows, {} remarks lines{}",
                    index + 1,
                    page.items.len(),
                    page.remarks_lines.len(),
                    if flags.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", flags.join(", "))
                    }
                );
            }

            let stats = calculate_statistics(&pages);
            println!("Pagination Statistics:");
            println!("  Pages: {}", stats.total_pages);
            println!("  Pages with rows: {}", stats.row_pages);
            println!("  Remarks-only pages: {}", stats.remarks_only_pages);
            println!("  Rows: {}", stats.total_rows);
            println!("  Remarks lines: {}", stats.total_remarks_lines);
            println!(
                "  Content height: {:.1}mm",
                layout.geometry.content_height_mm()
            );
        }

        Commands::ExportPdf {
            id,
            output,
            font_size,
            currency,
        } => {
            let options = bizdoc_export::ExportOptions {
                layout: resolve_layout(&cli).await?,
                font_size_pt: *font_size,
                currency_prefix: currency.clone().unwrap_or_default(),
            };
            let document = store.require(DocumentId(*id))?;
            bizdoc_export::generate_pdf(&document, &options, output).await?;
            println!("Exported {} → {}", DocumentId(*id), output.display());
        }

        Commands::ExportCsv { id, output } => {
            let options = bizdoc_export::ExportOptions {
                layout: resolve_layout(&cli).await?,
                ..Default::default()
            };
            let document = store.require(DocumentId(*id))?;
            bizdoc_export::export_csv(&document, &options, output).await?;
            println!("Exported {} → {}", DocumentId(*id), output.display());
        }

        Commands::Backup { output } => {
            let documents = store.list()?;
            let json = bizdoc_store::export_backup(&documents)?;
            tokio::fs::write(output, json).await?;
            println!("Backed up {} documents → {}", documents.len(), output.display());
        }

        Commands::Restore { input } => {
            let json = tokio::fs::read_to_string(input).await?;
            let documents = bizdoc_store::import_backup(&json)?;
            let count = store.restore(documents)?;
            store.flush().await?;
            println!("Restored {} documents from {}", count, input.display());
        }

        Commands::InitLayout { output } => {
            let layout = resolve_layout(&cli).await?;
            layout.save(output).await?;
            println!("Wrote layout options → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use log::LevelFilter;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paginate_with_overrides() {
        let cli = Cli::try_parse_from([
            "bizdoc",
            "paginate",
            "--id",
            "3",
            "--paper",
            "b5",
            "--orientation",
            "landscape",
            "--margin",
            "12",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.paper, Some(PaperArg::B5));
        assert_eq!(cli.orientation, Some(OrientationArg::Landscape));
        assert_eq!(cli.margin, Some(12.0));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Paginate { id: 3, json: false }));
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "bizdoc",
            "--store",
            "docs.json",
            "list",
            "--kind",
            "purchase-order",
            "--client",
            "acme",
        ])
        .unwrap();

        assert_eq!(cli.store, PathBuf::from("docs.json"));
        match cli.command {
            Commands::List { kind, client } => {
                assert_eq!(kind, Some(KindArg::PurchaseOrder));
                assert_eq!(client.as_deref(), Some("acme"));
            }
            _ => panic!("Expected list command"),
        }
    }

    #[tokio::test]
    async fn test_resolve_layout_overrides() {
        let cli = Cli::try_parse_from([
            "bizdoc",
            "paginate",
            "--id",
            "1",
            "--paper",
            "a3",
            "--margin",
            "15",
        ])
        .unwrap();

        let layout = resolve_layout(&cli).await.unwrap();
        assert_eq!(layout.geometry.paper_size, bizdoc_layout::PaperSize::A3);
        assert_eq!(layout.geometry.content_height_mm(), 390.0);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(logger::level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(logger::level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(logger::level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(logger::level_for_verbosity(7), LevelFilter::Trace);
    }
}
