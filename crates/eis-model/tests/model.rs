//! Serialization shape of the shared model types.

use eis_model::{CellValue, ImportIssue, ImportResult, Record};

#[test]
fn import_result_serializes_for_machine_output() {
    let mut result = ImportResult::new(vec!["name".to_owned(), "amount".to_owned()]);
    let mut record = Record::new();
    record.insert("name", CellValue::from("Rent"));
    record.insert("amount", CellValue::Number(950.0));
    result.push_record(record);
    result.push_issue(ImportIssue::field(2, "amount", "invalid number"));

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["columns"][1], "amount");
    assert_eq!(json["records"][0]["name"], "Rent");
    assert_eq!(json["records"][0]["amount"], 950.0);
    assert_eq!(json["issues"][0]["row"], 2);
    assert_eq!(json["issues"][0]["field"], "amount");
}

#[test]
fn issue_rendering_is_presentation_only() {
    let issue = ImportIssue::field(4, "date", "invalid date");
    // Structured fields stay intact; the string form is derived.
    assert_eq!(issue.row, Some(4));
    assert_eq!(issue.to_string(), "Row 4, column 'date': invalid date");
}
