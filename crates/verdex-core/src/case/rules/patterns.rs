//! Common regex patterns for judgment field extraction.
//!
//! The `regex` crate has no look-around, so label-terminated captures
//! consume their terminator instead of asserting it. All callers take
//! capture group 1 from the first match, where that makes no difference.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Case citation formats, tried in order. Group 1 is the sequential
    // number (possibly a range), group 2 the year of filing.
    pub static ref CITATION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"Appeal\s+\(civil\)\s+(\d+)\s+of\s+(\d{4})").unwrap(),
        Regex::new(r"Civil\s+Appeal\s+No\.\s*(\d+(?:-\d+)?)\s+of\s+(\d{4})").unwrap(),
        Regex::new(r"Transfer\s+Case\s+\(Civil\)\s+Nos\.\s*(\d+(?:-\d+)?)\s+of\s+(\d{4})").unwrap(),
        Regex::new(r"Civil\s+Appeal\s+Nos\.\s*(\d+(?:-\d+)?)\s+of\s+(\d{4})").unwrap(),
    ];

    // Labeled party blocks. Case-insensitive, spanning newlines, terminated
    // by the next label or end of text.
    pub static ref PETITIONER_BLOCK: Regex = Regex::new(
        r"(?is)(?:PETITIONER|APPELLANT):\s*(.*?)(?:RESPONDENT:|\z)"
    ).unwrap();

    pub static ref RESPONDENT_BLOCK: Regex = Regex::new(
        r"(?is)RESPONDENT:\s*(.*?)(?:DATE OF JUDGMENT:|\z)"
    ).unwrap();

    // "X Versus Y" / "X vs. Y" on a single line, for unlabeled
    // consolidated cases.
    pub static ref VERSUS_LINE: Regex = Regex::new(
        r"([^\n]+?)\s+(?:Versus|vs\.)\s+([^\n]+)"
    ).unwrap();

    // Start of a "WITH ..." consolidated-case section. Sections are sliced
    // positionally between consecutive headers (see `parties`).
    pub static ref WITH_HEADER: Regex = Regex::new(r"WITH\s+").unwrap();

    // Citation line inside a "WITH" section.
    pub static ref CIVIL_APPEAL_LINE: Regex = Regex::new(r"Civil Appeal No\.").unwrap();

    // Judgment date labels, tried in order; group 1 is returned verbatim.
    pub static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)DATE OF JUDGMENT:\s*(\d{2}/\d{2}/\d{4})").unwrap(),
        Regex::new(r"(?i)Dated:\s*(\d{1,2}(?:st|nd|rd|th)?\s+[A-Za-z]+,\s+\d{4})").unwrap(),
        Regex::new(r"(?i)judgment delivered on\s*:\s*(\d{1,2}(?:st|nd|rd|th)?\s+[A-Za-z]+,\s+\d{4})")
            .unwrap(),
    ];

    // Case background section headings, tried in order.
    pub static ref BACKGROUND_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?s)The Constitutional validity of(.*?)(?:\n\d+\.|\z)").unwrap(),
        Regex::new(r"(?s)JUDGMENT\s+\n+(.*?)(?:\n[A-Z\s]+:|\z)").unwrap(),
        Regex::new(r"(?s)(?:INTRODUCTION|BACKGROUND|FACTS)\s*\n+(.*?)(?:\n[A-Z\s]+:|\z)").unwrap(),
    ];

    // Last resort: first paragraph after a JUDGMENT heading.
    pub static ref BACKGROUND_FALLBACK: Regex =
        Regex::new(r"(?s)JUDGMENT.*?\n+(.*?)(?:\n\n|\z)").unwrap();

    // Capitalized "<Name> Act, <year>" references.
    pub static ref ACT_PATTERN: Regex = Regex::new(
        r"((?:The\s+)?[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+Act,\s+\d{4})"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_patterns_are_disjoint_on_number_suffix() {
        // "No." must not match inside "Nos."
        let text = "Civil Appeal Nos. 123-124 of 2020";
        assert!(!CITATION_PATTERNS[1].is_match(text));
        assert!(CITATION_PATTERNS[3].is_match(text));
    }

    #[test]
    fn test_date_label_matches_verbatim_capture() {
        let caps = DATE_PATTERNS[0].captures("DATE OF JUDGMENT: 01/01/2020").unwrap();
        assert_eq!(&caps[1], "01/01/2020");

        let caps = DATE_PATTERNS[1].captures("Dated: 3rd March, 2004").unwrap();
        assert_eq!(&caps[1], "3rd March, 2004");
    }

    #[test]
    fn test_act_pattern() {
        let caps = ACT_PATTERN
            .captures("challenges The Indian Penal Code Act, 1860 as amended")
            .unwrap();
        assert_eq!(&caps[1], "The Indian Penal Code Act, 1860");
    }
}
