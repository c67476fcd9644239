use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// The PDF input is unreadable or corrupt.
    DocumentParse(String),
    /// Catalog file lacks one or more required columns.
    SchemaValidation { missing: Vec<String> },
    /// Catalog file extension does not match its content (malformed CSV or
    /// workbook structure).
    FormatDecode { format: &'static str, detail: String },
    /// An extracted quantity does not fit the integer type.
    QuantityParse { sku: String, value: String },
    /// IO error (writer, serialization).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentParse(msg) => write!(f, "cannot read PDF: {msg}"),
            Self::SchemaValidation { missing } => write!(
                f,
                "catalog must contain columns: sku, descripcion, area (missing: {})",
                missing.join(", "),
            ),
            Self::FormatDecode { format, detail } => {
                write!(f, "cannot decode {format} catalog: {detail}")
            }
            Self::QuantityParse { sku, value } => {
                write!(f, "sku '{sku}': cannot parse quantity '{value}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
