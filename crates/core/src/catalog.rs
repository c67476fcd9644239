use std::collections::HashMap;

use crate::error::ReconError;
use crate::model::CatalogEntry;

/// Columns every catalog must carry, checked after header normalization.
/// Literal domain names, not translated.
pub const REQUIRED_COLUMNS: [&str; 3] = ["sku", "descripcion", "area"];

/// Lowercase and trim every header. Runs before the required-columns check
/// so `" SKU "` and `"Descripcion"` both satisfy it.
pub fn normalize_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|h| h.trim().to_lowercase()).collect()
}

/// Build catalog entries from a decoded header row plus data rows.
///
/// Rows are kept in input order and never deduplicated. Cells beyond the
/// required three columns land in `extra` untouched. Short rows read as
/// empty cells.
pub fn build_catalog<I>(headers: &[String], rows: I) -> Result<Vec<CatalogEntry>, ReconError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let headers = normalize_headers(headers);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == *c))
        .map(|c| (*c).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReconError::SchemaValidation { missing });
    }

    // Safe: presence checked above. First occurrence wins on duplicate headers.
    let idx = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let sku_idx = idx("sku");
    let descripcion_idx = idx("descripcion");
    let area_idx = idx("area");

    let mut entries = Vec::new();
    for row in rows {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();

        let mut extra = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            if i == sku_idx || i == descripcion_idx || i == area_idx {
                continue;
            }
            extra.insert(header.clone(), cell(i));
        }

        entries.push(CatalogEntry {
            sku: cell(sku_idx),
            descripcion: cell(descripcion_idx),
            area: cell(area_idx),
            extra,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn accepts_exact_columns() {
        let entries = build_catalog(
            &headers(&["sku", "descripcion", "area"]),
            vec![row(&["00123", "Martillo", "Herramientas"])],
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sku, "00123");
        assert_eq!(entries[0].descripcion, "Martillo");
        assert_eq!(entries[0].area, "Herramientas");
        assert!(entries[0].extra.is_empty());
    }

    #[test]
    fn header_case_and_whitespace_normalized() {
        let entries = build_catalog(
            &headers(&["  SKU ", "Descripcion", " AREA"]),
            vec![row(&["1", "a", "b"])],
        )
        .unwrap();
        assert_eq!(entries[0].sku, "1");
    }

    #[test]
    fn column_order_is_irrelevant() {
        let entries = build_catalog(
            &headers(&["area", "sku", "descripcion"]),
            vec![row(&["Herramientas", "00123", "Martillo"])],
        )
        .unwrap();
        assert_eq!(entries[0].sku, "00123");
        assert_eq!(entries[0].descripcion, "Martillo");
        assert_eq!(entries[0].area, "Herramientas");
    }

    #[test]
    fn extra_columns_pass_through() {
        let entries = build_catalog(
            &headers(&["sku", "descripcion", "area", "Precio"]),
            vec![row(&["1", "a", "b", "99.90"])],
        )
        .unwrap();
        assert_eq!(entries[0].extra.get("precio"), Some(&"99.90".to_string()));
    }

    #[test]
    fn missing_column_rejected_with_names() {
        let err = build_catalog(&headers(&["sku", "area"]), Vec::new()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sku"));
        assert!(msg.contains("descripcion"));
        assert!(msg.contains("area"));
        match err {
            ReconError::SchemaValidation { missing } => {
                assert_eq!(missing, vec!["descripcion".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_skus_kept() {
        let entries = build_catalog(
            &headers(&["sku", "descripcion", "area"]),
            vec![row(&["7", "a", "x"]), row(&["7", "b", "y"])],
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].descripcion, "a");
        assert_eq!(entries[1].descripcion, "b");
    }

    #[test]
    fn short_row_reads_empty_cells() {
        let entries = build_catalog(
            &headers(&["sku", "descripcion", "area"]),
            vec![row(&["1"])],
        )
        .unwrap();
        assert_eq!(entries[0].descripcion, "");
        assert_eq!(entries[0].area, "");
    }
}
