use crate::error::ReconError;
use crate::model::ReconciledRow;

/// Fixed download filename of the exported report.
pub const EXPORT_FILENAME: &str = "resultado_control.csv";

/// Media type offered for the download.
pub const EXPORT_MEDIA_TYPE: &str = "text/csv";

/// Header row, in projection order.
pub const EXPORT_HEADER: [&str; 4] = ["cantidad", "sku", "descripcion", "area"];

/// UTF-8 byte-order mark. Excel needs it to pick UTF-8 on import.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serialize reconciled rows to CSV bytes, BOM first, header always present.
/// Absent descripcion/area render as empty fields.
pub fn to_csv_bytes(rows: &[ReconciledRow]) -> Result<Vec<u8>, ReconError> {
    let mut out = Vec::from(UTF8_BOM);

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut out);

    writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| ReconError::Io(e.to_string()))?;

    for row in rows {
        writer
            .write_record([
                row.cantidad.to_string().as_str(),
                row.sku.as_str(),
                row.descripcion.as_deref().unwrap_or(""),
                row.area.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ReconError::Io(e.to_string()))?;
    }

    writer.flush().map_err(|e| ReconError::Io(e.to_string()))?;
    drop(writer);

    Ok(out)
}
