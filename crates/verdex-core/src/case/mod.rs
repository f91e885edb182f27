//! Judgment field extraction module.

mod parser;
pub mod rules;

pub use parser::{CaseParser, ExtractionResult, JudgmentParser};

use crate::models::case::CourtCase;

/// Trait for case field extractors.
pub trait CaseExtractor {
    /// Extract case data from plain text. Infallible: fields whose patterns
    /// fail to match degrade to empty or sentinel values.
    fn extract_from_text(&self, text: &str) -> CourtCase;
}
