//! Rule-based field extractors for court judgments.
//!
//! Each field is driven by an ordered list of patterns tried in sequence.
//! Whether a field takes the first match or collects every match is fixed
//! per field and documented on the relevant module.

pub mod background;
pub mod citations;
pub mod dates;
pub mod parties;
pub mod patterns;

pub use background::{extract_background, BackgroundInfo};
pub use citations::{extract_citations, CitationExtractor, CitationSet};
pub use dates::extract_judgment_date;
pub use parties::{extract_parties, PartySet};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text (first match wins).
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single pattern match with its source span.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub span: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, span: (usize, usize), source: impl Into<String>) -> Self {
        Self {
            value,
            span,
            source: source.into(),
        }
    }
}
