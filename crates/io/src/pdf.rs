use lopdf::Document;

use picklist_core::ReconError;

/// Extract plain text from every page of a PDF, concatenated in page order
/// with one newline between consecutive pages.
///
/// A page whose text extraction fails contributes an empty string — scanned
/// or image-only pages must not abort the remaining pages. An unreadable
/// document is an error and propagates.
pub fn extract_document_text(bytes: &[u8]) -> Result<String, ReconError> {
    let doc = Document::load_mem(bytes).map_err(|e| ReconError::DocumentParse(e.to_string()))?;

    let mut text = String::new();
    for (page_no, _) in doc.get_pages() {
        let page_text = doc.extract_text(&[page_no]).unwrap_or_default();
        // Fold a trailing newline into the page separator so the last line
        // of one page stays adjacent to the first line of the next.
        text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text));
        text.push('\n');
    }

    Ok(text)
}
