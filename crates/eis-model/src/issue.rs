//! Structured import issues.

use std::fmt;

use serde::Serialize;

/// One problem found while importing.
///
/// Issues stay structured inside the pipeline; they render to the
/// human-readable strings shown to admins only at the presentation
/// boundary (the `Display` impl).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportIssue {
    /// 1-indexed row the issue belongs to. For CSV row issues this is the
    /// original file line number (the header is line 1). `None` for
    /// structural and aggregated issues.
    pub row: Option<usize>,
    /// Field/column the issue belongs to, when it is field-scoped.
    pub field: Option<String>,
    pub message: String,
}

impl ImportIssue {
    /// File-level issue (empty file, bad JSON, missing headers).
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            row: None,
            field: None,
            message: message.into(),
        }
    }

    /// Issue scoped to one row.
    pub fn row(row: usize, message: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            field: None,
            message: message.into(),
        }
    }

    /// Issue scoped to one field of one row.
    pub fn field(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row: Some(row),
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, self.field.as_deref()) {
            (Some(row), Some(field)) => {
                write!(f, "Row {row}, column '{field}': {}", self.message)
            }
            (Some(row), None) => write!(f, "Row {row}: {}", self.message),
            _ => f.write_str(&self.message),
        }
    }
}
