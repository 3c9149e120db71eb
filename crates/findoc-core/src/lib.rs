//! Core library for financial document detection.
//!
//! This crate provides:
//! - Text extraction from mixed media (PDF, scanned images, plain text)
//! - Language-aware financial keyword scoring (ru/en/de/fr lexicons)
//! - Monetary amount and financial link pattern extraction
//! - The receipt/invoice classification decision with a confidence score
//!
//! The pipeline is a pure, stateless transform per document: mail retrieval,
//! persistence, and presentation are collaborators outside this crate.

pub mod classify;
pub mod error;
pub mod extract;
pub mod lang;
pub mod models;

pub use classify::{ContentClassifier, EMAIL_PERSIST_THRESHOLD, FINANCIAL_THRESHOLD};
pub use classify::amounts::{AmountExtractor, AmountMatch, parse_amount};
pub use classify::keywords::{KeywordHits, KeywordScorer};
pub use classify::lexicon::{FALLBACK_LANGUAGE, FinancialLexicon};
pub use classify::links::LinkSignalExtractor;
pub use error::{OcrError, PdfError};
pub use extract::{TextExtractor, is_processable_attachment};
pub use extract::ocr::{DisabledOcr, OcrEngine};
pub use lang::{LanguageDetect, WhatlangDetector};
pub use models::DocumentAnalysis;

#[cfg(feature = "ocr")]
pub use extract::ocr::TesseractOcr;
