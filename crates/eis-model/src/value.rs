//! Tagged value union for a single imported field.

use std::fmt;

use chrono::NaiveDateTime;
use serde::ser::{Serialize, Serializer};

/// Format used when rendering date/time values back to text.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Value of one cell in an imported record.
///
/// CSV fields start life as `Text` and are replaced by typed variants when
/// the field name is listed in one of the coercion sets on
/// [`ImportOptions`](crate::ImportOptions). JSON fields map directly from
/// their decoded type. A failed number coercion stores `Number(NaN)` (the
/// not-a-number sentinel); a failed date coercion keeps the original `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Null,
}

impl CellValue {
    /// Returns true for values the validator treats as absent:
    /// `Null` and empty or whitespace-only text.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the text content when this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric content when this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean content when this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the date/time content when this is a `DateTime` value.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(value) => {
                // Whole numbers render without the trailing ".0".
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            CellValue::Bool(value) => write!(f, "{value}"),
            CellValue::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
            CellValue::Null => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Number(value) => serializer.serialize_f64(*value),
            CellValue::Bool(value) => serializer.serialize_bool(*value),
            CellValue::DateTime(value) => {
                serializer.collect_str(&value.format(DATETIME_FORMAT))
            }
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}
