//! Subcommand implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, bail};

use eis_cli::logging::redact_value;
use eis_import::{
    ImportFormat, ImportOutcome, ImportSession, read_import_file, validate_required,
};
use eis_model::{ImportOptions, Record};

use crate::cli::{CheckArgs, FieldArgs, ImportArgs};
use crate::preview::{TerminalGate, print_issues};

/// Runs the full import workflow; returns the process exit code.
pub fn run_import(args: &ImportArgs) -> anyhow::Result<i32> {
    let options = options_from(&args.fields);
    let labels = labels_from(&args.labels)?;

    let mut session = ImportSession::new(options)
        .with_labels(labels)
        .with_preview_rows(args.preview_rows)
        .with_preview(!args.no_preview);
    let mut gate = TerminalGate {
        assume_yes: args.yes,
    };

    let mut committed: Option<Vec<Record>> = None;
    let outcome = runtime()?.block_on(session.import(&args.file, &mut gate, |records| {
        committed = Some(records);
    }))?;

    match outcome {
        ImportOutcome::Committed { rows } => {
            let records = committed.unwrap_or_default();
            trace_first_record(&records);

            if args.validate {
                let report = validate_required(&records, &args.fields.required);
                if !report.valid() {
                    print_issues(&report.issues);
                    eprintln!("Import blocked: required-field validation failed.");
                    return Ok(1);
                }
            }

            write_records(&records, args.output.as_deref())?;
            eprintln!("Imported {rows} row(s).");
            Ok(0)
        }
        ImportOutcome::Cancelled => {
            eprintln!("Import cancelled; no data was committed.");
            Ok(1)
        }
        ImportOutcome::Rejected { issues } => {
            print_issues(&issues);
            eprintln!("Import rejected; fix the file and retry.");
            Ok(1)
        }
    }
}

/// Parses and validates without committing; returns the process exit code.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    let format = ImportFormat::from_path(&args.file)
        .ok_or_else(|| anyhow!("unsupported file format: {}", args.file.display()))?;
    let options = options_from(&args.fields);

    let content = runtime()?.block_on(read_import_file(&args.file))?;
    let result = format.parse(&content, &options);

    let mut issues = result.issues.clone();
    if !args.fields.required.is_empty() {
        let report = validate_required(&result.records, &args.fields.required);
        issues.extend(report.issues);
    }

    if issues.is_empty() {
        println!("OK: {} row(s) parsed from {}.", result.row_count(), args.file.display());
        Ok(0)
    } else {
        print_issues(&issues);
        println!(
            "{} row(s) parsed from {}.",
            result.row_count(),
            args.file.display()
        );
        Ok(1)
    }
}

/// Single-threaded runtime for the one-shot async file read.
fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")
}

fn options_from(fields: &FieldArgs) -> ImportOptions {
    ImportOptions::new()
        .with_required(fields.required.iter().cloned())
        .with_number_fields(fields.number.iter().cloned())
        .with_date_fields(fields.date.iter().cloned())
        .with_boolean_fields(fields.boolean.iter().cloned())
        .with_skip_first_row(fields.skip_first_row)
}

/// Parses repeated `FIELD=LABEL` flags into the preview label mapping.
fn labels_from(pairs: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut labels = BTreeMap::new();
    for pair in pairs {
        let Some((field, label)) = pair.split_once('=') else {
            bail!("invalid --label '{pair}' (expected FIELD=LABEL)");
        };
        labels.insert(field.trim().to_owned(), label.trim().to_owned());
    }
    Ok(labels)
}

fn write_records(records: &[Record], output: Option<&Path>) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(records).context("failed to serialize committed records")?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Row-level values are redacted unless --log-values was passed.
fn trace_first_record(records: &[Record]) {
    let Some(record) = records.first() else {
        return;
    };
    for (field, value) in &record.cells {
        tracing::trace!(
            field = %field,
            value = %redact_value(&value.to_string()),
            "first committed record"
        );
    }
}
