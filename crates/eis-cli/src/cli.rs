//! CLI argument definitions for the import tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eis",
    version,
    about = "Expense Import Studio - import CSV/JSON data into the admin console",
    long_about = "Import admin data files into the expense tracker.\n\n\
                  Parses CSV or JSON input, applies configured type coercion,\n\
                  and previews the result before committing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level imported values in logs (redacted by default).
    #[arg(long = "log-values", global = true)]
    pub log_values: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV or JSON file with preview and commit.
    Import(ImportArgs),

    /// Parse a file and check required fields without committing.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the .csv or .json file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Display label for a preview column, as FIELD=LABEL (repeatable).
    #[arg(long = "label", value_name = "FIELD=LABEL")]
    pub labels: Vec<String>,

    /// Number of rows shown in the preview table.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 10)]
    pub preview_rows: usize,

    /// Skip the preview and commit a successful parse immediately.
    #[arg(long = "no-preview")]
    pub no_preview: bool,

    /// Confirm the preview without prompting.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,

    /// Also run the per-row required-field validator after parsing.
    #[arg(long = "validate")]
    pub validate: bool,

    /// Write committed records to a JSON file (stdout by default).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the .csv or .json file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Field configuration shared by `import` and `check`.
#[derive(Parser)]
pub struct FieldArgs {
    /// Field that must be present (repeatable).
    #[arg(long = "required", value_name = "FIELD")]
    pub required: Vec<String>,

    /// Field coerced to a number (repeatable).
    #[arg(long = "number", value_name = "FIELD")]
    pub number: Vec<String>,

    /// Field coerced to a date (repeatable).
    #[arg(long = "date", value_name = "FIELD")]
    pub date: Vec<String>,

    /// Field coerced to a boolean (repeatable).
    #[arg(long = "boolean", value_name = "FIELD")]
    pub boolean: Vec<String>,

    /// Skip the row immediately after the CSV header (banner row).
    #[arg(long = "skip-first-row")]
    pub skip_first_row: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
