//! OCR engine seam for `image/*` media.
//!
//! The default engine is tesseract behind the `ocr` cargo feature; builds
//! without it degrade image extraction to empty text.

use crate::error::OcrError;

/// Languages covered in the single OCR pass: all four lexicon languages at
/// once, no per-language retries.
pub const OCR_LANGUAGES: &str = "rus+eng+deu+fra";

/// A byte-to-text recognition capability for scanned images.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an encoded image (PNG, JPEG, TIFF, ...).
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;

    /// Whether this engine can actually run.
    fn is_available(&self) -> bool {
        true
    }
}

/// Placeholder engine for builds without OCR support.
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _image: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::EngineUnavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Tesseract-backed engine running one multi-language pass.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    languages: String,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    /// Engine covering the four lexicon languages.
    pub fn new() -> Self {
        Self::with_languages(OCR_LANGUAGES)
    }

    /// Engine with a custom tesseract language string (e.g. `"eng+deu"`).
    pub fn with_languages(languages: impl Into<String>) -> Self {
        Self {
            languages: languages.into(),
        }
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        // Reject bytes that are not a decodable image before handing them
        // to tesseract; malformed data can stall the native library.
        image::load_from_memory(image).map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        let mut tess = tesseract::Tesseract::new(None, Some(self.languages.as_str()))
            .map_err(|e| OcrError::Init(e.to_string()))?
            // Assume a single uniform block of text, as on a receipt.
            .set_variable("tessedit_pageseg_mode", "6")
            .map_err(|e| OcrError::Init(e.to_string()))?
            .set_image_from_mem(image)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_engine_reports_unavailable() {
        let engine = DisabledOcr;
        assert!(!engine.is_available());
        assert!(matches!(
            engine.recognize(b"\x89PNG"),
            Err(OcrError::EngineUnavailable)
        ));
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn garbage_bytes_are_rejected_as_invalid_image() {
        let engine = TesseractOcr::new();
        assert!(matches!(
            engine.recognize(b"definitely not an image"),
            Err(OcrError::InvalidImage(_))
        ));
    }
}
