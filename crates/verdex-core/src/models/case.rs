//! Court case data models.
//!
//! Plain immutable value records, one per extracted document. Every field
//! defaults to an empty or sentinel value; no runtime validation is applied
//! beyond type shape.

use serde::{Deserialize, Serialize};

/// Sentinel returned when no judgment-date pattern matches.
///
/// This is a normal, expected output value, not an error.
pub const DATE_NOT_FOUND: &str = "Date not found";

/// Placeholder case number for consolidated cases found only through a
/// "Versus" line, with no citation of their own.
pub const RELATED_CASE_LABEL: &str = "Related Case";

/// A formatted case-number citation as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCitation {
    /// Type of case (e.g. "Appeal", "Civil Appeal").
    pub case_type: String,

    /// Nature of the case (e.g. "civil").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    /// Sequential number of the case (may be a range, e.g. "123-124").
    pub sequential_number: String,

    /// Year of filing.
    pub year: String,

    /// Full citation, always the literal matched substring.
    pub full_citation: String,
}

/// A party to the litigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Name of the party.
    pub name: String,

    /// Role of the party (e.g. "Petitioner", "Respondent").
    pub role: String,

    /// Additional description if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Party {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            description: None,
        }
    }
}

/// A related case heard together with the primary case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedCase {
    /// Case number citation, or [`RELATED_CASE_LABEL`] when none was found.
    pub case_number: String,

    /// Petitioner/appellant in the case.
    pub petitioner: String,

    /// Respondent in the case.
    pub respondent: String,
}

/// One extraction result per document.
///
/// Created fresh per document and owned exclusively by the caller; no state
/// is shared across documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtCase {
    /// The main case under which the judgment is filed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_case_number: Option<CaseCitation>,

    /// Cases heard together with the primary case, in document order.
    pub related_case_numbers: Vec<CaseCitation>,

    /// Parties to the main case.
    pub main_parties: Vec<Party>,

    /// Consolidated cases with their own party pairs.
    pub consolidated_cases: Vec<ConsolidatedCase>,

    /// Judgment date, verbatim as matched, or [`DATE_NOT_FOUND`].
    pub judgment_date: String,

    /// Free-text case background.
    pub case_background: String,

    /// Fixed-vocabulary constitutional issue labels.
    pub constitutional_issues: Vec<String>,

    /// Legislative acts challenged in the case, verbatim substrings.
    pub challenged_acts: Vec<String>,
}

impl Default for CourtCase {
    fn default() -> Self {
        Self {
            primary_case_number: None,
            related_case_numbers: Vec::new(),
            main_parties: Vec::new(),
            consolidated_cases: Vec::new(),
            judgment_date: DATE_NOT_FOUND.to_string(),
            case_background: String::new(),
            constitutional_issues: Vec::new(),
            challenged_acts: Vec::new(),
        }
    }
}

impl CourtCase {
    /// Create a new empty case with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of main parties holding the given role.
    pub fn party_names(&self, role: &str) -> Vec<&str> {
        self.main_parties
            .iter()
            .filter(|p| p.role == role)
            .map(|p| p.name.as_str())
            .collect()
    }
}
