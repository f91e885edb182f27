//! Output formatting for extracted cases.

use verdex_core::models::case::CourtCase;
use verdex_core::models::config::ExportConfig;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Flattened CSV row (spreadsheet import)
    Csv,
    /// Formatted report
    Text,
}

pub fn format_case(
    case: &CourtCase,
    format: OutputFormat,
    export: &ExportConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(case)?),
        OutputFormat::Csv => format_csv(case, export),
        OutputFormat::Text => Ok(format_report(case)),
    }
}

/// Truncate text to a character budget, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

/// One flattened tabular row: one column per top-level field, lists joined
/// with the configured delimiter, long text truncated.
pub fn flatten_row(case: &CourtCase, export: &ExportConfig) -> Vec<String> {
    let sep = export.list_delimiter.as_str();

    vec![
        case.primary_case_number
            .as_ref()
            .map(|c| c.full_citation.clone())
            .unwrap_or_default(),
        case.related_case_numbers
            .iter()
            .map(|c| c.full_citation.as_str())
            .collect::<Vec<_>>()
            .join(sep),
        case.party_names("Petitioner").join(sep),
        case.party_names("Respondent").join(sep),
        case.consolidated_cases
            .iter()
            .map(|c| format!("{} vs. {}", c.petitioner, c.respondent))
            .collect::<Vec<_>>()
            .join(sep),
        case.judgment_date.clone(),
        truncate(&case.case_background, export.max_field_chars),
        case.constitutional_issues.join(sep),
        case.challenged_acts.join(sep),
    ]
}

pub const ROW_HEADER: [&str; 9] = [
    "primary_case_number",
    "related_case_numbers",
    "petitioners",
    "respondents",
    "consolidated_cases",
    "judgment_date",
    "case_background",
    "constitutional_issues",
    "challenged_acts",
];

fn format_csv(case: &CourtCase, export: &ExportConfig) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(ROW_HEADER)?;
    wtr.write_record(flatten_row(case, export))?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Sectioned report over one extracted case.
fn format_report(case: &CourtCase) -> String {
    let mut output = Vec::new();

    output.push("## Case Numbers".to_string());
    if let Some(primary) = &case.primary_case_number {
        output.push(format!(
            "The primary case number is formatted as \"{}\". This format includes:",
            primary.full_citation
        ));
        output.push(format!("- Type of case ({})", primary.case_type));
        if let Some(nature) = &primary.nature {
            output.push(format!("- Nature ({})", nature));
        }
        output.push(format!("- Sequential number ({})", primary.sequential_number));
        output.push(format!("- Year of filing ({})", primary.year));
        output.push(String::new());
    }

    if !case.related_case_numbers.is_empty() {
        output.push("The document also includes multiple related case numbers that were heard together:".to_string());
        for citation in &case.related_case_numbers {
            output.push(format!("- {}", citation.full_citation));
        }
        output.push(String::new());
    }

    output.push("## Parties Names".to_string());
    output.push("**Main Case:**".to_string());
    for party in &case.main_parties {
        output.push(format!("- {}: {}", party.role, party.name));
    }
    output.push(String::new());

    if !case.consolidated_cases.is_empty() {
        output.push("**Consolidated Cases with Multiple Parties:**".to_string());
        for consolidated in &case.consolidated_cases {
            output.push(format!(
                "- {} vs. {}",
                consolidated.petitioner, consolidated.respondent
            ));
        }
        output.push(String::new());
    }

    output.push("## Hearing Dates".to_string());
    output.push(format!(
        "The judgment date is clearly marked as \"{}\".",
        case.judgment_date
    ));
    output.push(String::new());

    output.push("## Case Background".to_string());
    if !case.challenged_acts.is_empty() {
        output.push("The case involves constitutional challenges to several legislative acts:".to_string());
        for act in &case.challenged_acts {
            output.push(format!("- {}", act));
        }
        output.push(String::new());
    }

    output.push(case.case_background.clone());

    if !case.constitutional_issues.is_empty() {
        output.push(String::new());
        output.push("The case fundamentally concerns the following constitutional issues:".to_string());
        for issue in &case.constitutional_issues {
            output.push(format!("- {}", issue));
        }
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdex_core::models::case::{CaseCitation, Party};

    fn sample_case() -> CourtCase {
        CourtCase {
            primary_case_number: Some(CaseCitation {
                case_type: "Appeal".to_string(),
                nature: Some("civil".to_string()),
                sequential_number: "123".to_string(),
                year: "2020".to_string(),
                full_citation: "Appeal (civil) 123 of 2020".to_string(),
            }),
            main_parties: vec![
                Party::new("Alice", "Petitioner"),
                Party::new("Bob", "Respondent"),
            ],
            judgment_date: "01/01/2020".to_string(),
            case_background: "Background text.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_truncate_respects_budget() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcde...");
    }

    #[test]
    fn test_flatten_row_columns() {
        let export = ExportConfig::default();
        let row = flatten_row(&sample_case(), &export);

        assert_eq!(row.len(), ROW_HEADER.len());
        assert_eq!(row[0], "Appeal (civil) 123 of 2020");
        assert_eq!(row[2], "Alice");
        assert_eq!(row[3], "Bob");
        assert_eq!(row[5], "01/01/2020");
    }

    #[test]
    fn test_flatten_row_joins_lists_with_delimiter() {
        let export = ExportConfig {
            list_delimiter: "; ".to_string(),
            ..Default::default()
        };
        let mut case = sample_case();
        case.challenged_acts = vec![
            "The Taxation Act, 1998".to_string(),
            "The Finance Act, 1994".to_string(),
        ];
        let row = flatten_row(&case, &export);
        assert_eq!(row[8], "The Taxation Act, 1998; The Finance Act, 1994");
    }

    #[test]
    fn test_json_output_includes_field_names() {
        let export = ExportConfig::default();
        let json = format_case(&sample_case(), OutputFormat::Json, &export).unwrap();
        assert!(json.contains("\"primary_case_number\""));
        assert!(json.contains("\"judgment_date\""));
        assert!(json.contains("\"challenged_acts\""));
    }

    #[test]
    fn test_report_sections() {
        let export = ExportConfig::default();
        let report = format_case(&sample_case(), OutputFormat::Text, &export).unwrap();
        assert!(report.contains("## Case Numbers"));
        assert!(report.contains("## Parties Names"));
        assert!(report.contains("## Hearing Dates"));
        assert!(report.contains("## Case Background"));
        assert!(report.contains("- Petitioner: Alice"));
    }
}
