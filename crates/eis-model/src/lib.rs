//! Data model for the admin-console import pipeline.
//!
//! The import pipeline turns raw CSV or JSON file content into ordered,
//! typed records plus a structured issue list. This crate holds the shared
//! vocabulary: the cell value union, the record shape, the caller-supplied
//! import options, and the result/issue types. Parsing lives in
//! `eis-import`; presentation lives in `eis-cli`.

mod issue;
mod options;
mod record;
mod result;
mod value;

pub use issue::ImportIssue;
pub use options::ImportOptions;
pub use record::Record;
pub use result::ImportResult;
pub use value::CellValue;
