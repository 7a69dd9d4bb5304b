//! One logical row of imported data.

use std::collections::BTreeMap;

use crate::CellValue;

/// A single imported record: field name to cell value.
///
/// Column order is not stored here; it lives on
/// [`ImportResult::columns`](crate::ImportResult) so every record of one
/// import shares the same ordering.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Record {
    pub cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value under the same name.
    pub fn insert(&mut self, field: impl Into<String>, value: CellValue) {
        self.cells.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.cells.contains_key(field)
    }

    /// Number of fields on this record.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
