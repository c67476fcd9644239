//! `picklist-io` — byte-buffer decoders for the reconciliation pipeline.
//!
//! PDF text extraction and catalog decoding (CSV, Excel). Inputs are
//! in-memory buffers supplied by the caller; nothing is retained across
//! calls and all failures propagate as `picklist_core::ReconError`.

pub mod catalog;
pub mod pdf;

pub use catalog::load_catalog;
pub use pdf::extract_document_text;
