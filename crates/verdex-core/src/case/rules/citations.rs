//! Case-number citation extraction.
//!
//! The primary citation is the first match of the first pattern that
//! matches anywhere in the text. Related citations collect every match of
//! every pattern, excluding only the exact span already used as primary;
//! duplicates produced by overlapping patterns are kept as-is.

use crate::models::case::CaseCitation;

use super::patterns::CITATION_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Citation extractor over the ordered pattern list.
pub struct CitationExtractor;

impl CitationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CitationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CitationExtractor {
    type Output = ExtractionMatch<CaseCitation>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for pattern in CITATION_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text) {
                return Some(citation_match(&caps));
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        for pattern in CITATION_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                results.push(citation_match(&caps));
            }
        }
        results
    }
}

fn citation_match(caps: &regex::Captures<'_>) -> ExtractionMatch<CaseCitation> {
    let m = caps.get(0).unwrap();
    let citation = CaseCitation {
        case_type: classify_case_type(m.as_str()).to_string(),
        nature: Some("civil".to_string()),
        sequential_number: caps[1].to_string(),
        year: caps[2].to_string(),
        full_citation: m.as_str().to_string(),
    };
    ExtractionMatch::new(citation, (m.start(), m.end()), m.as_str())
}

fn classify_case_type(citation: &str) -> &'static str {
    if citation.contains("Civil Appeal") {
        "Civil Appeal"
    } else if citation.contains("Transfer Case") {
        "Transfer Case (Civil)"
    } else {
        "Appeal"
    }
}

/// Primary and related citations found in a document.
#[derive(Debug, Clone, Default)]
pub struct CitationSet {
    /// The main case citation, if any pattern matched.
    pub primary: Option<CaseCitation>,
    /// Every other citation match, in pattern then document order.
    pub related: Vec<CaseCitation>,
}

/// Extract the primary and related case numbers from judgment text.
///
/// Fails silently: text with no recognizable citation yields an empty set.
pub fn extract_citations(text: &str) -> CitationSet {
    let extractor = CitationExtractor::new();

    let primary = extractor.extract(text);
    let primary_span = primary.as_ref().map(|m| m.span);

    let related = extractor
        .extract_all(text)
        .into_iter()
        .filter(|m| Some(m.span) != primary_span)
        .map(|m| m.value)
        .collect();

    CitationSet {
        primary: primary.map(|m| m.value),
        related,
    }
}
