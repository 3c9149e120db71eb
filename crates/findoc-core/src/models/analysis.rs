//! The structured result of classifying one document or message body.

use serde::{Deserialize, Serialize};

/// Analysis of a single document (attachment or email body).
///
/// Created fresh per classification call and immutable once produced.
/// Ownership passes to the persistence collaborator, which decorates it with
/// message metadata (sender, subject, date) before storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Source filename, or [`DocumentAnalysis::EMAIL_CONTENT`] when the
    /// analyzed input was a message body rather than an attachment.
    pub filename: String,

    /// Declared media type of the source.
    pub mime_type: String,

    /// First 1000 characters of the extracted/combined text.
    pub text_snippet: String,

    /// Detected language code; always a key present in the lexicon.
    ///
    /// Best-effort: detection is probabilistic for short or mixed-language
    /// text, and unknown languages collapse to `"en"`.
    pub language: String,

    /// Heuristic confidence that the text is a financial document.
    ///
    /// Capped at 100 for email-body analysis; bounded by the scoring
    /// formula to at most 60 for attachments.
    pub financial_score: u32,

    /// Matched keywords in scan order, first occurrence only.
    pub keywords_found: Vec<String>,

    /// Matched amount literals as found in the source text, at most 3.
    pub amounts_found: Vec<String>,

    /// The classification decision.
    pub is_financial: bool,
}

impl DocumentAnalysis {
    /// Sentinel filename used for email-body analysis.
    pub const EMAIL_CONTENT: &'static str = "email_content";

    /// `keywords_found` as a JSON array, the form the persistence
    /// collaborator stores.
    pub fn keywords_json(&self) -> String {
        serde_json::to_string(&self.keywords_found).unwrap_or_else(|_| "[]".to_string())
    }

    /// `amounts_found` as a JSON array.
    pub fn amounts_json(&self) -> String {
        serde_json::to_string(&self.amounts_found).unwrap_or_else(|_| "[]".to_string())
    }
}
