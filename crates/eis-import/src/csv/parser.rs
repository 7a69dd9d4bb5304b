//! CSV record assembly with configurable type coercion.

use eis_model::{CellValue, ImportIssue, ImportOptions, ImportResult, Record};

use crate::coerce::{parse_boolean, parse_datetime, parse_number};

use super::line::tokenize_line;

/// Parses a full CSV body into records.
///
/// Line 1 is the header and defines the shape of every record. Rows whose
/// field count differs from the header are dropped with one issue carrying
/// the 1-indexed file line number; rows with failed number/date coercion
/// are kept (the offending field holds a NaN sentinel or the raw text).
pub fn parse_csv(input: &str, options: &ImportOptions) -> ImportResult {
    if input.trim().is_empty() {
        return ImportResult::empty_failure(ImportIssue::structural("File is empty"));
    }

    let lines: Vec<&str> = input.split('\n').collect();

    let headers = tokenize_line(lines[0]);
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return ImportResult::empty_failure(ImportIssue::structural("No header row found"));
    }

    let mut result = ImportResult::new(headers.clone());

    // One aggregated issue for missing required columns; row processing
    // continues regardless.
    if !options.required.is_empty() {
        let missing: Vec<&str> = options
            .required
            .iter()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            result.push_issue(ImportIssue::structural(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }
    }

    let start = if options.skip_first_row { 2 } else { 1 };

    for (index, line) in lines.iter().enumerate().skip(start) {
        if line.trim().is_empty() {
            continue;
        }
        // 1-indexed, matching the original file line number.
        let line_number = index + 1;

        let fields = tokenize_line(line);
        if fields.len() != headers.len() {
            result.push_issue(ImportIssue::row(
                line_number,
                format!(
                    "column count mismatch: expected {}, found {}",
                    headers.len(),
                    fields.len()
                ),
            ));
            continue;
        }

        let mut record = Record::new();
        for (header, raw) in headers.iter().zip(fields) {
            let value = coerce_field(header, raw, line_number, options, &mut result);
            record.insert(header.clone(), value);
        }
        result.push_record(record);
    }

    tracing::debug!(
        rows = result.row_count(),
        issues = result.issues.len(),
        "parsed CSV input"
    );
    result
}

/// Applies the configured coercion for one field. Precedence: number, then
/// date, then boolean, then raw text. Coercion failures are non-fatal; the
/// issue is recorded and the row still emitted.
fn coerce_field(
    header: &str,
    raw: String,
    line_number: usize,
    options: &ImportOptions,
    result: &mut ImportResult,
) -> CellValue {
    if options.number_fields.contains(header) {
        match parse_number(&raw) {
            Some(value) => CellValue::Number(value),
            None => {
                result.push_issue(ImportIssue::field(line_number, header, "invalid number"));
                CellValue::Number(f64::NAN)
            }
        }
    } else if options.date_fields.contains(header) {
        match parse_datetime(&raw) {
            Some(value) => CellValue::DateTime(value),
            None => {
                result.push_issue(ImportIssue::field(line_number, header, "invalid date"));
                CellValue::Text(raw)
            }
        }
    } else if options.boolean_fields.contains(header) {
        CellValue::Bool(parse_boolean(&raw))
    } else {
        CellValue::Text(raw)
    }
}
