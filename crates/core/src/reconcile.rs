use std::collections::HashMap;

use crate::model::{CatalogEntry, ExtractedRecord, ReconciledRow};

/// Left join extracted records against the catalog on exact sku text.
///
/// Every record yields at least one output row: k catalog matches fan out
/// into k rows (in catalog order), zero matches yield a single row with
/// absent descripcion/area. The result is sorted ascending by the sku text;
/// `sort_by` is stable, so equal skus keep their pre-sort join order.
pub fn reconcile(records: &[ExtractedRecord], catalog: &[CatalogEntry]) -> Vec<ReconciledRow> {
    let mut by_sku: HashMap<&str, Vec<&CatalogEntry>> = HashMap::new();
    for entry in catalog {
        by_sku.entry(entry.sku.as_str()).or_default().push(entry);
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        match by_sku.get(record.sku.as_str()) {
            Some(matches) => {
                for entry in matches {
                    rows.push(ReconciledRow {
                        cantidad: record.cantidad,
                        sku: record.sku.clone(),
                        descripcion: Some(entry.descripcion.clone()),
                        area: Some(entry.area.clone()),
                    });
                }
            }
            None => rows.push(ReconciledRow {
                cantidad: record.cantidad,
                sku: record.sku.clone(),
                descripcion: None,
                area: None,
            }),
        }
    }

    rows.sort_by(|a, b| a.sku.cmp(&b.sku));
    rows
}
