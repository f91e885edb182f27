//! Party extraction: labeled blocks, "Versus" lines, and "WITH" sections.
//!
//! Three passes, executed in order and merged:
//! 1. labeled PETITIONER/RESPONDENT blocks populate the main parties;
//! 2. "X Versus Y" lines catch unlabeled consolidated cases, skipped when
//!    either name already appears among the labeled main parties;
//! 3. "WITH ..." sections are scanned line-wise for an embedded citation
//!    plus party pair.
//!
//! The versus and WITH passes overlap on some documents; pass 3 optionally
//! skips pairs pass 2 already produced.

use crate::models::case::{ConsolidatedCase, Party, RELATED_CASE_LABEL};

use super::patterns::{
    CIVIL_APPEAL_LINE, PETITIONER_BLOCK, RESPONDENT_BLOCK, VERSUS_LINE, WITH_HEADER,
};

/// Main and consolidated parties found in a document.
#[derive(Debug, Clone, Default)]
pub struct PartySet {
    /// Parties to the main case.
    pub main: Vec<Party>,
    /// Party pairs of consolidated cases.
    pub consolidated: Vec<ConsolidatedCase>,
}

/// Extract all parties from judgment text.
pub fn extract_parties(text: &str, dedupe_consolidated: bool) -> PartySet {
    let mut parties = PartySet::default();

    if let Some(caps) = PETITIONER_BLOCK.captures(text) {
        let name = caps[1].trim();
        if !name.is_empty() {
            parties.main.push(Party::new(name, "Petitioner"));
        }
    }

    if let Some(caps) = RESPONDENT_BLOCK.captures(text) {
        let name = caps[1].trim();
        if !name.is_empty() {
            parties.main.push(Party::new(name, "Respondent"));
        }
    }

    scan_versus_lines(text, &mut parties);
    scan_with_sections(text, dedupe_consolidated, &mut parties);

    parties
}

fn scan_versus_lines(text: &str, parties: &mut PartySet) {
    let main_petitioners: Vec<&str> = parties
        .main
        .iter()
        .filter(|p| p.role == "Petitioner")
        .map(|p| p.name.as_str())
        .collect();
    let main_respondents: Vec<&str> = parties
        .main
        .iter()
        .filter(|p| p.role == "Respondent")
        .map(|p| p.name.as_str())
        .collect();

    for caps in VERSUS_LINE.captures_iter(text) {
        let petitioner = caps[1].trim().to_string();
        let respondent = caps[2].trim().to_string();

        if !main_petitioners.contains(&petitioner.as_str())
            && !main_respondents.contains(&respondent.as_str())
        {
            parties.consolidated.push(ConsolidatedCase {
                case_number: RELATED_CASE_LABEL.to_string(),
                petitioner,
                respondent,
            });
        }
    }
}

fn scan_with_sections(text: &str, dedupe: bool, parties: &mut PartySet) {
    for section in with_sections(text) {
        let lines: Vec<&str> = section.trim().split('\n').collect();

        let mut case_number = String::new();
        let mut petitioner = String::new();
        let mut respondent = String::new();

        for (i, line) in lines.iter().enumerate() {
            if CIVIL_APPEAL_LINE.is_match(line) {
                case_number = line.trim().to_string();
            } else if line.contains("...") && petitioner.is_empty() {
                if i > 0 {
                    petitioner = lines[i - 1].trim().to_string();
                }
            } else if line.contains("Versus") && i + 1 < lines.len() {
                respondent = lines[i + 1].trim().to_string();
            }
        }

        if case_number.is_empty() || (petitioner.is_empty() && respondent.is_empty()) {
            continue;
        }

        if dedupe
            && parties
                .consolidated
                .iter()
                .any(|c| c.petitioner == petitioner && c.respondent == respondent)
        {
            continue;
        }

        parties.consolidated.push(ConsolidatedCase {
            case_number,
            petitioner,
            respondent,
        });
    }
}

/// Slice out "WITH ..." sections, each running from the end of its header
/// to the next header, the first blank line, or end of text.
fn with_sections(text: &str) -> Vec<&str> {
    let headers: Vec<(usize, usize)> = WITH_HEADER
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut sections = Vec::with_capacity(headers.len());
    for (i, &(_, body_start)) in headers.iter().enumerate() {
        let limit = headers
            .get(i + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(text.len());

        let mut body = &text[body_start..limit];
        if let Some(pos) = body.find("\n\n") {
            body = &body[..pos];
        }
        sections.push(body);
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_blocks() {
        let text = "PETITIONER: Alice\nRESPONDENT: Bob\nDATE OF JUDGMENT: 01/01/2020";
        let parties = extract_parties(text, true);

        assert_eq!(
            parties.main,
            vec![Party::new("Alice", "Petitioner"), Party::new("Bob", "Respondent")]
        );
    }

    #[test]
    fn test_appellant_label_accepted() {
        let text = "APPELLANT: State of Kerala\nRESPONDENT: Union of India\nDATE OF JUDGMENT: 02/02/2004";
        let parties = extract_parties(text, true);

        assert_eq!(parties.main[0].name, "State of Kerala");
        assert_eq!(parties.main[0].role, "Petitioner");
    }

    #[test]
    fn test_versus_line_adds_consolidated_pair() {
        let text = "Some Company Ltd. Versus State of Punjab\n";
        let parties = extract_parties(text, true);

        assert!(parties.main.is_empty());
        assert_eq!(parties.consolidated.len(), 1);
        assert_eq!(parties.consolidated[0].case_number, RELATED_CASE_LABEL);
        assert_eq!(parties.consolidated[0].petitioner, "Some Company Ltd.");
        assert_eq!(parties.consolidated[0].respondent, "State of Punjab");
    }

    #[test]
    fn test_versus_line_skipped_when_already_labeled() {
        let text = "PETITIONER: Alice\nRESPONDENT: Bob\nDATE OF JUDGMENT: 01/01/2020\nAlice Versus Bob\n";
        let parties = extract_parties(text, true);

        // The pair already appears among the labeled main parties.
        assert_eq!(parties.main.len(), 2);
        assert!(parties.consolidated.is_empty());
    }

    #[test]
    fn test_with_section_extraction() {
        let text = "WITH \nCivil Appeal No. 45 of 2019\nSome Trust\n...Appellant\nVersus\nState of Gujarat\n\nunrelated text";
        let parties = extract_parties(text, true);

        let with_case = parties
            .consolidated
            .iter()
            .find(|c| c.case_number == "Civil Appeal No. 45 of 2019")
            .expect("WITH section case present");
        assert_eq!(with_case.petitioner, "Some Trust");
        assert_eq!(with_case.respondent, "State of Gujarat");
    }

    #[test]
    fn test_with_sections_split_on_next_header() {
        let text = "WITH \nCivil Appeal No. 1 of 2019\nA\n...\nVersus\nB\nWITH \nCivil Appeal No. 2 of 2019\nC\n...\nVersus\nD\n";
        let sections = with_sections(text);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].contains("No. 1"));
        assert!(!sections[0].contains("No. 2"));
        assert!(sections[1].contains("No. 2"));
    }

    #[test]
    fn test_with_pass_dedupes_versus_pairs() {
        // The versus scan inside the WITH body already produced (A, B).
        let text = "WITH \nCivil Appeal No. 1 of 2019\nA\n...\nA Versus B\nB\n";
        let deduped = extract_parties(text, true);
        let kept = extract_parties(text, false);

        assert!(kept.consolidated.len() > deduped.consolidated.len());
    }
}
