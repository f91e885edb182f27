//! Judgment date extraction.

use crate::models::case::DATE_NOT_FOUND;

use super::patterns::DATE_PATTERNS;

/// Extract the judgment date from document text.
///
/// Tries the labeled date patterns in order and returns the first captured
/// text verbatim; no parsing or normalization is applied. Returns the
/// [`DATE_NOT_FOUND`] sentinel when nothing matches.
pub fn extract_judgment_date(text: &str) -> String {
    for pattern in DATE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            return caps[1].trim().to_string();
        }
    }

    DATE_NOT_FOUND.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_of_judgment_label() {
        let date = extract_judgment_date("DATE OF JUDGMENT: 01/01/2020\n");
        assert_eq!(date, "01/01/2020");
    }

    #[test]
    fn test_dated_label_long_form() {
        let date = extract_judgment_date("Dated: 3rd March, 2004");
        assert_eq!(date, "3rd March, 2004");
    }

    #[test]
    fn test_delivered_on_label() {
        let date = extract_judgment_date("judgment delivered on : 15th August, 1997");
        assert_eq!(date, "15th August, 1997");
    }

    #[test]
    fn test_first_pattern_wins() {
        let text = "DATE OF JUDGMENT: 01/01/2020\nDated: 3rd March, 2004";
        assert_eq!(extract_judgment_date(text), "01/01/2020");
    }

    #[test]
    fn test_sentinel_when_no_label_matches() {
        assert_eq!(extract_judgment_date("no dates here"), DATE_NOT_FOUND);
        assert_eq!(extract_judgment_date(""), DATE_NOT_FOUND);
    }
}
