use regex::Regex;

use crate::error::ReconError;
use crate::model::ExtractedRecord;

/// A SKU line followed immediately by a Cantidad line. The `[^\n]*` hinge
/// skips trailing content on the SKU line but never crosses the newline, so
/// a blank line between the two labels breaks the match.
const RECORD_PATTERN: &str = r"SKU:\s*(\d+)[^\n]*\nCantidad:\s*(\d+)";

/// Scan the picklist text for (sku, cantidad) records.
///
/// Matches are non-overlapping, found in left-to-right scan order, and kept
/// in that order. Duplicate skus are not collapsed. Zero matches is a valid
/// outcome and yields an empty vec.
pub fn extract_records(text: &str) -> Result<Vec<ExtractedRecord>, ReconError> {
    let re = Regex::new(RECORD_PATTERN).unwrap();

    let mut records = Vec::new();
    for caps in re.captures_iter(text) {
        let sku = caps.get(1).unwrap().as_str().to_string();
        let qty = caps.get(2).unwrap().as_str();
        let cantidad: u64 = qty.parse().map_err(|_| ReconError::QuantityParse {
            sku: sku.clone(),
            value: qty.to_string(),
        })?;

        records.push(ExtractedRecord { sku, cantidad });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_records_in_scan_order() {
        let text = "SKU: 00123\nCantidad: 5\nSKU: 456\nCantidad: 2\n";
        let records = extract_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ExtractedRecord { sku: "00123".into(), cantidad: 5 });
        assert_eq!(records[1], ExtractedRecord { sku: "456".into(), cantidad: 2 });
    }

    #[test]
    fn leading_zeros_survive() {
        let records = extract_records("SKU: 0007\nCantidad: 1\n").unwrap();
        assert_eq!(records[0].sku, "0007");
    }

    #[test]
    fn trailing_content_on_sku_line_ignored() {
        let text = "SKU: 00123 - Bodega Norte (pendiente)\nCantidad: 5\n";
        let records = extract_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sku, "00123");
        assert_eq!(records[0].cantidad, 5);
    }

    #[test]
    fn blank_line_between_labels_breaks_match() {
        let text = "SKU: 00123\n\nCantidad: 5\n";
        assert!(extract_records(text).unwrap().is_empty());
    }

    #[test]
    fn unrelated_line_between_labels_breaks_match() {
        let text = "SKU: 00123\nOtro texto\nCantidad: 5\n";
        assert!(extract_records(text).unwrap().is_empty());
    }

    #[test]
    fn zero_matches_is_empty_not_error() {
        let records = extract_records("nothing to see here\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn duplicates_kept() {
        let text = "SKU: 111\nCantidad: 1\nSKU: 111\nCantidad: 3\n";
        let records = extract_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cantidad, 1);
        assert_eq!(records[1].cantidad, 3);
    }

    #[test]
    fn whitespace_after_labels_tolerated() {
        let records = extract_records("SKU:   42\nCantidad:\t7\n").unwrap();
        assert_eq!(records[0], ExtractedRecord { sku: "42".into(), cantidad: 7 });
    }

    #[test]
    fn oversized_quantity_is_parse_error() {
        let text = "SKU: 1\nCantidad: 99999999999999999999999999\n";
        let err = extract_records(text).unwrap_err();
        assert!(matches!(err, ReconError::QuantityParse { .. }));
    }
}
