use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single (sku, cantidad) pair parsed from the picklist text.
///
/// The sku is opaque text, never a number — `00123` and `123` are different
/// skus and leading zeros must survive the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub sku: String,
    pub cantidad: u64,
}

/// One row of the product catalog.
///
/// Duplicate skus are kept as-is; the join handles fan-out. Columns beyond
/// the required three are carried in `extra` and ignored by the projection.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub sku: String,
    pub descripcion: String,
    pub area: String,
    pub extra: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One reconciled row. `None` marks a sku with no catalog match and is
/// rendered as an empty field on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledRow {
    pub cantidad: u64,
    pub sku: String,
    pub descripcion: Option<String>,
    pub area: Option<String>,
}
