//! PDF text extraction using lopdf with a pdf-extract fallback.

use lopdf::Document;
use tracing::{debug, trace};

use crate::error::PdfError;

/// Extract text from PDF bytes, page by page in page order.
///
/// Page failures are skipped (partial success); a document that cannot be
/// parsed at all yields an empty string. Never returns an error.
pub fn extract_text(data: &[u8]) -> String {
    match try_extract(data) {
        Ok(text) => text,
        Err(e) => {
            debug!("PDF extraction failed: {e}");
            String::new()
        }
    }
}

fn try_extract(data: &[u8]) -> Result<String, PdfError> {
    let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

    // Some producers encrypt with an empty password.
    if doc.is_encrypted() {
        if doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("decrypted PDF with empty password");
    }

    // get_pages returns a BTreeMap, so iteration follows page order.
    let pages = doc.get_pages();
    let mut text = String::new();

    for &number in pages.keys() {
        match doc.extract_text(&[number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => trace!("page {number} yielded no text: {e}"),
        }
    }

    // Content streams lopdf cannot decode sometimes still parse with
    // pdf-extract; try it before reporting an empty document.
    if text.trim().is_empty() {
        match pdf_extract::extract_text_from_mem(data) {
            Ok(fallback) => return Ok(fallback),
            Err(e) => trace!("pdf-extract fallback failed: {e}"),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    /// Build a one-page PDF containing the given text.
    pub(crate) fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn garbage_bytes_yield_empty() {
        assert_eq!(extract_text(b"not a pdf"), "");
        assert_eq!(extract_text(b""), "");
    }

    #[test]
    fn truncated_pdf_yields_empty() {
        let mut data = pdf_with_text("Total 99.00 USD");
        data.truncate(40);
        assert_eq!(extract_text(&data), "");
    }

    #[test]
    fn extracts_page_text() {
        let data = pdf_with_text("Total 99.00 USD");
        let text = extract_text(&data);
        assert!(text.contains("Total 99.00 USD"), "got: {text:?}");
    }
}
