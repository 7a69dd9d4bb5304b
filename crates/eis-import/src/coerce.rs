//! Field-level type coercion.
//!
//! Coercion is configuration driven: a field is coerced only when its name
//! is listed in one of the sets on [`ImportOptions`](eis_model::ImportOptions).
//! When a name appears in more than one set, precedence is number, then
//! date, then boolean.

use chrono::{NaiveDate, NaiveDateTime};

/// Accepted date/time formats, tried in order. Date-only formats parse to
/// midnight.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parses a trimmed value as a floating-point number.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Parses a calendar date or date/time from a closed list of formats.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Boolean coercion: true iff the value is case-insensitive "true",
/// exactly "1", or case-insensitive "yes". Everything else is false;
/// this coercion never fails.
pub fn parse_boolean(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("  -3 "), Some(-3.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_datetime_date_only() {
        let parsed = parse_datetime("2024-03-01").unwrap();
        assert_eq!(parsed.date().to_string(), "2024-03-01");
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_parse_datetime_iso() {
        let parsed = parse_datetime("2024-03-01T09:30:15").unwrap();
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.second(), 15);
    }

    #[test]
    fn test_parse_datetime_slash_formats() {
        assert!(parse_datetime("03/01/2024").is_some());
        assert!(parse_datetime("2024/03/01").is_some());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime("2024-13-40"), None);
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn test_parse_boolean_truth_table() {
        for truthy in ["true", "TRUE", "True", "1", "yes", "Yes", "YES"] {
            assert!(parse_boolean(truthy), "{truthy} should be true");
        }
        for falsy in ["0", "false", "", "no", "on", "y", "2"] {
            assert!(!parse_boolean(falsy), "{falsy} should be false");
        }
    }
}
