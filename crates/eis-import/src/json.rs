//! JSON record parsing.
//!
//! The JSON path accepts a top-level array of objects and preserves each
//! object's shape; only the configured coercion fields are touched. Unlike
//! the CSV path, failed date/number coercion here records no issue (the
//! value is left unchanged or becomes the NaN sentinel). That asymmetry is
//! long-standing observed behavior of the import surface and is kept for
//! parity; see DESIGN.md.

use std::collections::BTreeSet;

use serde_json::Value as JsonValue;

use eis_model::{CellValue, ImportIssue, ImportOptions, ImportResult, Record};

use crate::coerce::{parse_datetime, parse_number};

/// Parses a JSON body into records.
///
/// Undecodable input or a non-array top level is a structural failure with
/// one explanatory issue. `[]` is a valid, empty success. Required fields
/// are checked against the first element only, producing one aggregated
/// non-blocking issue (parity with the CSV header check).
pub fn parse_json(input: &str, options: &ImportOptions) -> ImportResult {
    let decoded: JsonValue = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(_) => {
            return ImportResult::empty_failure(ImportIssue::structural("File is not valid JSON"));
        }
    };

    let JsonValue::Array(elements) = decoded else {
        return ImportResult::empty_failure(ImportIssue::structural(
            "Expected a JSON array of records",
        ));
    };

    let mut result = ImportResult::new(Vec::new());

    if !options.required.is_empty()
        && let Some(first) = elements.first()
    {
        let missing: Vec<&str> = options
            .required
            .iter()
            .filter(|name| first.get(name.as_str()).is_none())
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            result.push_issue(ImportIssue::structural(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
    }

    for element in elements {
        result.push_record(build_record(element, options));
    }

    result.columns = column_union(&result.records);

    tracing::debug!(
        rows = result.row_count(),
        issues = result.issues.len(),
        "parsed JSON input"
    );
    result
}

/// Shallow-copies one array element into a record, applying coercion.
/// Non-object elements produce an empty record. Only text values are
/// re-parsed: numbers already satisfy a number field, and booleans,
/// nulls, and nested values keep their decoded type.
fn build_record(element: JsonValue, options: &ImportOptions) -> Record {
    let JsonValue::Object(fields) = element else {
        return Record::new();
    };

    let mut record = Record::new();
    for (name, value) in fields {
        let mut cell = json_to_cell(value);
        if options.number_fields.contains(&name) {
            if let CellValue::Text(text) = &cell {
                cell = CellValue::Number(parse_number(text).unwrap_or(f64::NAN));
            }
        } else if options.date_fields.contains(&name)
            && let CellValue::Text(text) = &cell
            && let Some(parsed) = parse_datetime(text)
        {
            cell = CellValue::DateTime(parsed);
        }
        record.insert(name, cell);
    }
    record
}

/// Maps a decoded JSON value onto the cell union. Nested arrays and
/// objects are stored as their compact JSON text.
fn json_to_cell(value: JsonValue) -> CellValue {
    match value {
        JsonValue::Null => CellValue::Null,
        JsonValue::Bool(b) => CellValue::Bool(b),
        JsonValue::Number(n) => CellValue::Number(n.as_f64().unwrap_or(f64::NAN)),
        JsonValue::String(s) => CellValue::Text(s),
        nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
            CellValue::Text(nested.to_string())
        }
    }
}

/// Sorted union of all field names, used as the display column order.
fn column_union(records: &[Record]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for record in records {
        for name in record.cells.keys() {
            names.insert(name.clone());
        }
    }
    names.into_iter().collect()
}
