//! Post-hoc required-field validation.
//!
//! The parsers only check that required names appear in the header or the
//! first record. This validator is the stronger, caller-invoked check: a
//! full enumeration over every record, independent of source format.

use eis_model::{ImportIssue, Record};

/// Outcome of a required-field validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ImportIssue>,
}

impl ValidationReport {
    pub fn valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }
}

/// Checks every record for every required field.
///
/// One issue per (record, field) violation, where a violation is an absent
/// field, a null, or empty/whitespace-only text. Records are 1-indexed.
/// An empty record set is itself a violation.
pub fn validate_required<I, S>(records: &[Record], required: I) -> ValidationReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ValidationReport::default();

    if records.is_empty() {
        report
            .issues
            .push(ImportIssue::structural("No records to validate"));
        return report;
    }

    let required: Vec<String> = required
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect();

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        for field in &required {
            let missing = match record.get(field) {
                Some(value) => value.is_missing(),
                None => true,
            };
            if missing {
                report
                    .issues
                    .push(ImportIssue::field(row, field.clone(), "missing required value"));
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        violations = report.issues.len(),
        "validated required fields"
    );
    report
}
