//! Caller-supplied configuration for an import attempt.

use std::collections::BTreeSet;

/// Options controlling parsing and coercion. All fields are optional.
///
/// A field name should appear in at most one of the three coercion sets;
/// when it appears in several, coercion applies in the fixed precedence
/// number, then date, then boolean.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Field names that must be present in the CSV header (or the first
    /// JSON record). Absence produces one aggregated, non-blocking issue.
    pub required: BTreeSet<String>,
    /// Fields coerced to date/time values.
    pub date_fields: BTreeSet<String>,
    /// Fields coerced to floating-point numbers.
    pub number_fields: BTreeSet<String>,
    /// Fields coerced to booleans ("true"/"1"/"yes", case-insensitive
    /// except "1"; everything else is false).
    pub boolean_fields: BTreeSet<String>,
    /// Skip the line immediately after the CSV header (banner or second
    /// header row). Ignored by the JSON path.
    pub skip_first_row: bool,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_number_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.number_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_boolean_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_skip_first_row(mut self, skip: bool) -> Self {
        self.skip_first_row = skip;
        self
    }
}
