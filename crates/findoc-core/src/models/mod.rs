//! Output data models.

mod analysis;

pub use analysis::DocumentAnalysis;
