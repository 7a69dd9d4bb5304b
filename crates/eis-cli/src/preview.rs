//! Preview and issue rendering for the terminal.

use std::io::{self, BufRead, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eis_import::{ImportPreview, PreviewDecision, PreviewGate};
use eis_model::ImportIssue;

/// Preview gate backed by stdin/stdout: renders the sample table and asks
/// for confirmation unless `assume_yes` is set.
pub struct TerminalGate {
    pub assume_yes: bool,
}

impl PreviewGate for TerminalGate {
    fn review(&mut self, preview: &ImportPreview<'_>) -> PreviewDecision {
        print_preview(preview);
        if self.assume_yes {
            return PreviewDecision::Commit;
        }
        prompt_confirm(preview.total_rows)
    }
}

/// Renders the preview sample as a table, using display labels where the
/// caller provided them.
pub fn print_preview(preview: &ImportPreview<'_>) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        preview
            .columns
            .iter()
            .map(|column| header_cell(preview.label_for(column))),
    );
    for record in preview.sample {
        table.add_row(preview.columns.iter().map(|column| {
            record
                .get(column)
                .map_or_else(|| Cell::new(""), |value| Cell::new(value))
        }));
    }
    println!("{table}");

    let shown = preview.sample.len();
    if shown < preview.total_rows {
        println!("Showing first {shown} of {} rows.", preview.total_rows);
    } else {
        println!("{} rows.", preview.total_rows);
    }
}

/// Renders issues as a Row / Column / Problem table.
pub fn print_issues(issues: &[ImportIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Problem"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            issue
                .row
                .map_or_else(|| dim_cell("-"), |row| Cell::new(row)),
            issue
                .field
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&issue.message).fg(Color::Red),
        ]);
    }
    println!("{table}");
    println!("{} issue(s).", issues.len());
}

fn prompt_confirm(total_rows: usize) -> PreviewDecision {
    print!("Import {total_rows} row(s)? [y/N] ");
    if io::stdout().flush().is_err() {
        return PreviewDecision::Cancel;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return PreviewDecision::Cancel;
    }
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        PreviewDecision::Commit
    } else {
        PreviewDecision::Cancel
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
