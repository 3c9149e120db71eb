//! Text extraction from heterogeneous document media.

pub mod ocr;
mod pdf;

use tracing::{debug, trace};

use self::ocr::OcrEngine;

/// Media types the extractor handles for attachments.
pub const SUPPORTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/tiff",
    "text/plain",
];

/// File extensions worth downloading for analysis.
pub const PROCESSABLE_EXTENSIONS: &[&str] = &[".pdf", ".jpg", ".jpeg", ".png", ".tiff", ".txt"];

/// Attachments larger than this are skipped.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Converts raw byte content plus a declared media type into plain text.
///
/// Has no knowledge of financial content. Every failure path converges to
/// an empty (or partial) string: this type never panics and never surfaces
/// an error to the caller.
pub struct TextExtractor {
    ocr: Box<dyn OcrEngine>,
}

impl TextExtractor {
    /// Create an extractor with the default OCR engine for this build
    /// (tesseract when the `ocr` feature is enabled, otherwise disabled).
    pub fn new() -> Self {
        #[cfg(feature = "ocr")]
        {
            Self::with_engine(Box::new(ocr::TesseractOcr::new()))
        }
        #[cfg(not(feature = "ocr"))]
        {
            Self::with_engine(Box::new(ocr::DisabledOcr))
        }
    }

    /// Create an extractor with a custom OCR engine.
    pub fn with_engine(engine: Box<dyn OcrEngine>) -> Self {
        Self { ocr: engine }
    }

    /// Extract plain text from `data` according to its declared media type.
    ///
    /// PDF pages are concatenated in order with partial success allowed,
    /// images go through one multi-language OCR pass, `text/*` is decoded
    /// lossily, and anything else yields an empty string. The result is
    /// trimmed of surrounding whitespace.
    pub fn extract(&self, data: &[u8], mime_type: &str) -> String {
        let text = if mime_type == "application/pdf" {
            pdf::extract_text(data)
        } else if mime_type.starts_with("image/") {
            match self.ocr.recognize(data) {
                Ok(text) => text,
                Err(e) => {
                    debug!("OCR failed: {e}");
                    String::new()
                }
            }
        } else if mime_type.starts_with("text/") {
            String::from_utf8_lossy(data).into_owned()
        } else {
            trace!("unsupported media type: {mime_type}");
            String::new()
        };

        text.trim().to_string()
    }

    /// Whether an OCR engine is present for `image/*` media.
    pub fn ocr_available(&self) -> bool {
        self.ocr.is_available()
    }

    /// Whether this media type is on the attachment allowlist.
    pub fn supports(mime_type: &str) -> bool {
        SUPPORTED_MIME_TYPES.contains(&mime_type)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-filter for attachments: supported media type, a processable file
/// extension, and a bounded size.
pub fn is_processable_attachment(filename: &str, mime_type: &str, size: u64) -> bool {
    if size > MAX_ATTACHMENT_BYTES {
        return false;
    }

    let name = filename.to_lowercase();
    if !PROCESSABLE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return false;
    }

    TextExtractor::supports(mime_type)
}
