//! Judgment parser combining the per-field rule extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::case::CourtCase;

use super::rules::{extract_background, extract_citations, extract_judgment_date, extract_parties};
use super::CaseExtractor;

/// Result of a single document extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted case data.
    pub case: CourtCase,
    /// Raw text the extraction ran over.
    pub raw_text: String,
    /// Extraction warnings (fields that fell back to empty/sentinel values).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for case parsing.
pub trait CaseParser {
    /// Parse a case from text. Infallible and idempotent: identical input
    /// yields identical output, and unmatched fields degrade to their
    /// empty/sentinel defaults instead of raising.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based judgment parser.
///
/// Pure single pass over an immutable input string; each field is extracted
/// independently and first-match-wins within its own pattern list.
pub struct JudgmentParser {
    /// Whether the "WITH" block pass skips party pairs the "Versus" scan
    /// already produced.
    dedupe_consolidated: bool,
}

impl JudgmentParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            dedupe_consolidated: true,
        }
    }

    /// Set consolidated-case deduplication between the versus and WITH passes.
    pub fn with_consolidated_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe_consolidated = dedupe;
        self
    }
}

impl Default for JudgmentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseParser for JudgmentParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing judgment from {} characters of text", text.len());

        let citations = extract_citations(text);
        if citations.primary.is_none() {
            warnings.push("No case number pattern matched".to_string());
        }

        let parties = extract_parties(text, self.dedupe_consolidated);
        if parties.main.is_empty() {
            warnings.push("No labeled parties found".to_string());
        }

        let judgment_date = extract_judgment_date(text);
        if judgment_date == crate::models::case::DATE_NOT_FOUND {
            warnings.push("No judgment date label matched".to_string());
        }

        let background = extract_background(text);
        if background.case_background.is_empty() {
            warnings.push("No case background heading matched".to_string());
        }

        let case = CourtCase {
            primary_case_number: citations.primary,
            related_case_numbers: citations.related,
            main_parties: parties.main,
            consolidated_cases: parties.consolidated,
            judgment_date,
            case_background: background.case_background,
            constitutional_issues: background.constitutional_issues,
            challenged_acts: background.challenged_acts,
        };

        debug!(
            "Extracted case {:?} with {} related citations, {} warnings",
            case.primary_case_number.as_ref().map(|c| c.full_citation.as_str()),
            case.related_case_numbers.len(),
            warnings.len()
        );

        ExtractionResult {
            case,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl CaseExtractor for JudgmentParser {
    fn extract_from_text(&self, text: &str) -> CourtCase {
        self.parse(text).case
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::case::{Party, DATE_NOT_FOUND};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "Appeal (civil) 123 of 2020\n\n\
        PETITIONER: Alice\n\
        RESPONDENT: Bob\n\
        DATE OF JUDGMENT: 01/01/2020\n\n\
        JUDGMENT \n\n\
        The Constitutional validity of the Taxation Act, 1998 is challenged \
        for want of jurisdiction of the High Court.\n\
        1. First ground.\n\n\
        WITH \n\
        Civil Appeal No. 45 of 2020\n\
        Some Trust\n\
        ...Appellant\n\
        Versus\n\
        State of Gujarat\n";

    #[test]
    fn test_full_document_extraction() {
        let parser = JudgmentParser::new();
        let result = parser.parse(SAMPLE);
        let case = &result.case;

        let primary = case.primary_case_number.as_ref().unwrap();
        assert_eq!(primary.full_citation, "Appeal (civil) 123 of 2020");

        let related: Vec<&str> = case
            .related_case_numbers
            .iter()
            .map(|c| c.full_citation.as_str())
            .collect();
        assert_eq!(related, vec!["Civil Appeal No. 45 of 2020"]);

        assert_eq!(case.main_parties[0], Party::new("Alice", "Petitioner"));
        assert_eq!(case.judgment_date, "01/01/2020");
        assert!(case
            .constitutional_issues
            .contains(&"Constitutional validity of state legislation".to_string()));
        assert!(case
            .constitutional_issues
            .contains(&"Jurisdiction of High Courts".to_string()));
    }

    #[test]
    fn test_empty_input_yields_default_case() {
        let parser = JudgmentParser::new();
        let result = parser.parse("");

        assert_eq!(result.case, CourtCase::default());
        assert_eq!(result.case.judgment_date, DATE_NOT_FOUND);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let parser = JudgmentParser::new();
        let first = parser.parse(SAMPLE);
        let second = parser.parse(SAMPLE);
        assert_eq!(first.case, second.case);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_extractor_trait_matches_parse() {
        let parser = JudgmentParser::new();
        let via_trait = parser.extract_from_text(SAMPLE);
        assert_eq!(via_trait, parser.parse(SAMPLE).case);
    }
}
