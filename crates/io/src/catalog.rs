use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use picklist_core::{build_catalog, CatalogEntry, ReconError};

/// Decode a catalog file into entries, dispatching on the declared filename:
/// a case-insensitive `.csv` suffix goes to the delimited decoder, anything
/// else to the spreadsheet decoder (`.xlsx`, `.xls`, ...).
pub fn load_catalog(bytes: &[u8], filename: &str) -> Result<Vec<CatalogEntry>, ReconError> {
    if filename.to_lowercase().ends_with(".csv") {
        load_catalog_csv(bytes)
    } else {
        load_catalog_workbook(bytes)
    }
}

/// Decode a delimited-text catalog. UTF-8 with a Windows-1252 fallback;
/// a leading byte-order mark is dropped before the header row is read.
pub fn load_catalog_csv(bytes: &[u8]) -> Result<Vec<CatalogEntry>, ReconError> {
    let content = decode_text(bytes);
    let content = content.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_decode_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_decode_err)?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    build_catalog(&headers, rows)
}

/// Decode a spreadsheet catalog from the first sheet of the workbook.
pub fn load_catalog_workbook(bytes: &[u8]) -> Result<Vec<CatalogEntry>, ReconError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(workbook_decode_err)?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names.first().ok_or_else(|| ReconError::FormatDecode {
        format: "workbook",
        detail: "workbook contains no sheets".into(),
    })?;

    let range = workbook.worksheet_range(first).map_err(workbook_decode_err)?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };
    let data: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    build_catalog(&headers, data)
}

/// Decode file bytes as UTF-8, falling back to Windows-1252 (common for
/// Excel-exported CSVs).
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Render a cell as text. Integral floats drop the fractional part so sku
/// cells typed as numbers join against the extracted digit strings.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn csv_decode_err(e: csv::Error) -> ReconError {
    ReconError::FormatDecode { format: "csv", detail: e.to_string() }
}

fn workbook_decode_err(e: calamine::Error) -> ReconError {
    ReconError::FormatDecode { format: "workbook", detail: e.to_string() }
}
