// picklist CLI - reconcile a picklist PDF against a product catalog

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use picklist_core::{extract_records, reconcile, to_csv_bytes, ReconError, EXPORT_FILENAME};
use picklist_io::{extract_document_text, load_catalog};

use exit_codes::{EXIT_DOCUMENT, EXIT_ERROR, EXIT_FORMAT, EXIT_IO, EXIT_SCHEMA, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "picklist")]
#[command(about = "Reconcile a picklist PDF against a product catalog (CSV/Excel)")]
#[command(version)]
#[command(after_help = "\
Examples:
  picklist envio.pdf base_productos.xlsx
  picklist envio.pdf base_productos.csv -o informe.csv
  picklist envio.pdf base_productos.csv --json > preview.json")]
struct Cli {
    /// Picklist PDF to extract (sku, cantidad) records from
    pdf: PathBuf,

    /// Product catalog (.csv, .xlsx or .xls) with sku/descripcion/area columns
    catalog: PathBuf,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = EXPORT_FILENAME)]
    out: PathBuf,

    /// Also print the reconciled rows as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Suppress progress on stderr
    #[arg(long, short = 'q')]
    quiet: bool,
}

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Map a pipeline error to its registry exit code.
    pub fn recon(err: ReconError) -> Self {
        let code = match &err {
            ReconError::DocumentParse(_) => EXIT_DOCUMENT,
            ReconError::SchemaValidation { .. } => EXIT_SCHEMA,
            ReconError::FormatDecode { .. } => EXIT_FORMAT,
            ReconError::QuantityParse { .. } => EXIT_ERROR,
            ReconError::Io(_) => EXIT_IO,
        };
        let hint = match &err {
            ReconError::SchemaValidation { .. } => {
                Some("headers are matched case- and whitespace-insensitively".to_string())
            }
            ReconError::FormatDecode { .. } => {
                Some("check that the file extension matches its content".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Lowercased file extension, if any.
fn extension(path: &std::path::Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if extension(&cli.pdf).as_deref() != Some("pdf") {
        return Err(CliError::usage(format!(
            "{}: expected a .pdf picklist",
            cli.pdf.display(),
        )));
    }
    if !matches!(extension(&cli.catalog).as_deref(), Some("csv" | "xlsx" | "xls")) {
        return Err(CliError::usage(format!(
            "{}: expected a .csv, .xlsx or .xls catalog",
            cli.catalog.display(),
        ))
        .with_hint("the catalog needs sku, descripcion and area columns"));
    }

    let pdf_bytes = std::fs::read(&cli.pdf)
        .map_err(|e| CliError::io(format!("cannot read {}: {}", cli.pdf.display(), e)))?;
    let catalog_bytes = std::fs::read(&cli.catalog)
        .map_err(|e| CliError::io(format!("cannot read {}: {}", cli.catalog.display(), e)))?;
    let catalog_name = cli
        .catalog
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let text = extract_document_text(&pdf_bytes).map_err(CliError::recon)?;
    let records = extract_records(&text).map_err(CliError::recon)?;
    if !cli.quiet {
        eprintln!("Extracted {} record(s) from {}", records.len(), cli.pdf.display());
        if records.is_empty() {
            eprintln!("note: no SKU/Cantidad pairs found; the report will be empty");
        }
    }

    let catalog = load_catalog(&catalog_bytes, &catalog_name).map_err(CliError::recon)?;
    if !cli.quiet {
        eprintln!("Loaded {} catalog entries from {}", catalog.len(), cli.catalog.display());
    }

    let rows = reconcile(&records, &catalog);
    let unmatched = rows.iter().filter(|r| r.descripcion.is_none()).count();

    if cli.json {
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        println!("{json}");
    }

    let bytes = to_csv_bytes(&rows).map_err(CliError::recon)?;
    std::fs::write(&cli.out, &bytes)
        .map_err(|e| CliError::io(format!("cannot write {}: {}", cli.out.display(), e)))?;

    if !cli.quiet {
        eprintln!(
            "Wrote {} row(s) to {} ({} without a catalog match)",
            rows.len(),
            cli.out.display(),
            unmatched,
        );
    }

    Ok(())
}
