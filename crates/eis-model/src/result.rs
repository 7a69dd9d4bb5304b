//! Result of one import attempt.

use serde::Serialize;

use crate::{ImportIssue, Record};

/// Everything a parse produced: column order, records, and issues.
///
/// `success()` and `row_count()` are derived rather than stored, so
/// `row_count() == records.len()` and `success() == issues.is_empty()`
/// hold by construction. A result is transient: it lives only until the
/// accompanying preview is confirmed or cancelled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportResult {
    /// Column display order: CSV header order, or the sorted key union of
    /// all records for JSON input.
    pub columns: Vec<String>,
    /// Successfully produced records, in file row order. Rows dropped for
    /// a column-count mismatch are absent here but present in `issues`.
    pub records: Vec<Record>,
    /// All issues in the order they were encountered.
    pub issues: Vec<ImportIssue>,
}

impl ImportResult {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Structural failure: no columns, no records, exactly one issue.
    pub fn empty_failure(issue: ImportIssue) -> Self {
        Self {
            columns: Vec::new(),
            records: Vec::new(),
            issues: vec![issue],
        }
    }

    /// True iff no issues were accumulated.
    pub fn success(&self) -> bool {
        self.issues.is_empty()
    }

    /// Count of successfully produced records.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn push_issue(&mut self, issue: ImportIssue) {
        self.issues.push(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellValue;

    #[test]
    fn test_empty_failure() {
        let result = ImportResult::empty_failure(ImportIssue::structural("File is empty"));
        assert!(!result.success());
        assert_eq!(result.row_count(), 0);
        assert!(result.columns.is_empty());
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_success_tracks_issues() {
        let mut result = ImportResult::new(vec!["name".to_owned()]);
        assert!(result.success());

        let mut record = Record::new();
        record.insert("name", CellValue::from("Rent"));
        result.push_record(record);
        assert!(result.success());
        assert_eq!(result.row_count(), 1);

        result.push_issue(ImportIssue::row(3, "column count mismatch"));
        assert!(!result.success());
        assert_eq!(result.row_count(), 1);
    }
}
