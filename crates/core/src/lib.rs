//! `picklist-core` — picklist/catalog reconciliation engine.
//!
//! Pure engine crate: receives extracted document text and decoded catalog
//! tables, returns reconciled rows. No file IO or CLI dependencies.

pub mod catalog;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod reconcile;

pub use catalog::{build_catalog, REQUIRED_COLUMNS};
pub use error::ReconError;
pub use export::{to_csv_bytes, EXPORT_FILENAME, EXPORT_MEDIA_TYPE};
pub use extract::extract_records;
pub use model::{CatalogEntry, ExtractedRecord, ReconciledRow};
pub use reconcile::reconcile;
