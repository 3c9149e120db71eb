//! Error types for the findoc-core library.
//!
//! Extraction failures are recovered inside the extraction contract (a bad
//! document degrades to empty text, never an error to the caller); these
//! types exist at the collaborator seams and in log lines.

use thiserror::Error;

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to parse the PDF bytes.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and could not be decrypted.
    #[error("PDF is encrypted")]
    Encrypted,
}

/// Errors related to image OCR.
#[derive(Error, Debug)]
pub enum OcrError {
    /// No OCR engine is available (crate built without the `ocr` feature).
    #[error("OCR engine unavailable")]
    EngineUnavailable,

    /// Failed to initialize the OCR engine.
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    /// The input bytes are not a decodable image.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),
}
