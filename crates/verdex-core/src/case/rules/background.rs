//! Case background, challenged acts, and constitutional issues.

use super::patterns::{ACT_PATTERN, BACKGROUND_FALLBACK, BACKGROUND_PATTERNS};

/// Background information extracted from a judgment.
#[derive(Debug, Clone, Default)]
pub struct BackgroundInfo {
    /// Free-text case background, empty when no heading matched.
    pub case_background: String,
    /// Fixed-vocabulary constitutional issue labels.
    pub constitutional_issues: Vec<String>,
    /// "<Name> Act, <year>" references inside the background text.
    pub challenged_acts: Vec<String>,
}

/// Extract the case background and derived fields.
///
/// Section-heading patterns are tried in order and the first capture wins;
/// when none match, the first paragraph after a JUDGMENT heading is used.
/// Challenged acts come from the background text only, while the
/// constitutional-issue vocabulary is matched against the full document.
pub fn extract_background(text: &str) -> BackgroundInfo {
    let mut result = BackgroundInfo::default();

    for pattern in BACKGROUND_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            result.case_background = caps[1].trim().to_string();
            break;
        }
    }

    if result.case_background.is_empty() {
        if let Some(caps) = BACKGROUND_FALLBACK.captures(text) {
            result.case_background = caps[1].trim().to_string();
        }
    }

    result.challenged_acts = ACT_PATTERN
        .captures_iter(&result.case_background)
        .map(|caps| caps[1].to_string())
        .collect();

    let lowered = text.to_lowercase();
    if lowered.contains("constitutional validity") {
        result
            .constitutional_issues
            .push("Constitutional validity of state legislation".to_string());
    }
    if lowered.contains("jurisdiction") && lowered.contains("high court") {
        result
            .constitutional_issues
            .push("Jurisdiction of High Courts".to_string());
    }

    result
}
