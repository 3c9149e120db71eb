//! Language identification behind a narrow seam.
//!
//! The classifier only needs `detect(text) -> code`; keeping the capability
//! behind a trait lets alternate detectors be substituted without touching
//! the scoring logic.

use whatlang::Lang;

/// A language-identification capability.
pub trait LanguageDetect: Send + Sync {
    /// Best-effort language code for `text`, preferring ISO 639-1 two-letter
    /// codes. Returns `None` when detection fails (empty, too short, or
    /// ambiguous input).
    ///
    /// Callers must treat the result as a hint: detection is probabilistic
    /// for short or mixed-language text.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detector backed by the `whatlang` trigram classifier.
#[derive(Debug, Clone, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetect for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        let code = iso639_1(info.lang())
            // whatlang only exposes ISO 639-3 for the long tail; the lexicon
            // won't know those codes and the classifier falls back to "en".
            .unwrap_or_else(|| info.lang().code());
        Some(code.to_string())
    }
}

/// Two-letter code for the languages the lexicon can know about.
fn iso639_1(lang: Lang) -> Option<&'static str> {
    match lang {
        Lang::Eng => Some("en"),
        Lang::Rus => Some("ru"),
        Lang::Deu => Some("de"),
        Lang::Fra => Some("fr"),
        _ => None,
    }
}
