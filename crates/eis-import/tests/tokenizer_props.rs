//! Property tests for the CSV line tokenizer.

use eis_import::tokenize_line;
use proptest::prelude::*;

proptest! {
    /// Joining quote-free, comma-free, trimmed fields with commas and
    /// tokenizing reproduces the original fields.
    #[test]
    fn zip_round_trip(fields in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..8)) {
        let trimmed: Vec<String> = fields.iter().map(|f| f.trim().to_owned()).collect();
        let line = fields.join(",");
        prop_assert_eq!(tokenize_line(&line), trimmed);
    }

    /// Any single value survives quoting: commas and doubled quotes in a
    /// quoted field decode back to the content.
    #[test]
    fn quoted_field_round_trip(value in "[a-zA-Z0-9,\" ]{0,16}") {
        let quoted = format!("\"{}\"", value.replace('"', "\"\""));
        let line = format!("{quoted},tail");
        let fields = tokenize_line(&line);
        prop_assert_eq!(fields.len(), 2);
        prop_assert_eq!(fields[0].as_str(), value.trim());
        prop_assert_eq!(fields[1].as_str(), "tail");
    }

    /// Field count is always comma count + 1 outside quotes.
    #[test]
    fn unquoted_field_count(line in "[a-zA-Z0-9, ]{0,32}") {
        let commas = line.matches(',').count();
        prop_assert_eq!(tokenize_line(&line).len(), commas + 1);
    }
}
