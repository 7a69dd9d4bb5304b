//! File import pipeline for the admin console.
//!
//! This crate turns raw CSV or JSON file content into typed, validated
//! records with a structured issue list, behind a preview-before-commit
//! workflow.
//!
//! # Features
//!
//! - **CSV parsing**: quoted fields, doubled-quote escapes, per-row
//!   column-count checks, configurable type coercion
//! - **JSON parsing**: top-level arrays of objects with the same coercion
//!   configuration
//! - **Validation**: post-hoc required-field checks over parsed records
//! - **File reading**: one-shot async read with size and encoding guards
//! - **Workflow**: extension-based format dispatch and a confirm/cancel
//!   preview gate in front of the caller's commit callback
//!
//! # Example
//!
//! ```ignore
//! use eis_import::{ImportSession, parse_csv};
//! use eis_model::ImportOptions;
//!
//! let options = ImportOptions::new()
//!     .with_required(["name", "amount"])
//!     .with_number_fields(["amount"]);
//!
//! let result = parse_csv("name,amount\nRent,950\n", &options);
//! assert!(result.success());
//! ```

mod coerce;
mod csv;
mod error;
mod json;
mod reader;
mod validate;
mod workflow;

// === Error Types ===
pub use error::{ImportError, Result};

// === Parsing ===
pub use csv::{parse_csv, tokenize_line};
pub use json::parse_json;

// === Coercion ===
pub use coerce::{parse_boolean, parse_datetime, parse_number};

// === Validation ===
pub use validate::{ValidationReport, validate_required};

// === File Reading ===
pub use reader::{MAX_IMPORT_FILE_SIZE, read_import_file, read_import_file_with_limit};

// === Workflow ===
pub use workflow::{
    DEFAULT_PREVIEW_ROWS, ImportFormat, ImportOutcome, ImportPhase, ImportPreview, ImportSession,
    PreviewDecision, PreviewGate,
};
