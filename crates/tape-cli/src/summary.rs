use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use tape_map::closest_column;
use tape_model::{
    CanonicalField, CellValue, ColumnMapping, INGEST_FIELDS, Severity, VALIDATION_FIELDS,
    ValidationSummary,
};

use crate::types::{IngestOutcome, ValidateResult};

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Validated"),
        header_cell("Required"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in INGEST_FIELDS {
        table.add_row(vec![
            field_cell(field),
            Cell::new(field.label()),
            flag_cell(VALIDATION_FIELDS.contains(&field)),
            flag_cell(field.is_required()),
            dim_cell(field.aliases().join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_mapping(
    source: &Path,
    fields: &[CanonicalField],
    mapping: &ColumnMapping,
    headers: &[String],
) {
    println!("Tape: {}", source.display());
    println!("Mapped: {} of {} fields", mapping.len(), fields.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Column"),
        header_cell("Closest header"),
    ]);
    apply_table_style(&mut table);
    for &field in fields {
        let (column, hint) = match mapping.get(field) {
            Some(column) => (Cell::new(column).fg(Color::Green), dim_cell("-")),
            None => {
                // Near misses only; they never feed back into the mapping.
                let hint = match closest_column(field, headers) {
                    Some(suggestion) => Cell::new(format!(
                        "{} ({:.2})",
                        suggestion.column, suggestion.score
                    ))
                    .fg(Color::Yellow),
                    None => dim_cell("-"),
                };
                (Cell::new("unmapped").fg(Color::Red), hint)
            }
        };
        table.add_row(vec![field_cell(field), Cell::new(field.label()), column, hint]);
    }
    println!("{table}");
}

pub fn print_validation(result: &ValidateResult) {
    let summary = &result.run.summary;
    println!("Tape: {}", result.source.display());
    println!("SHA-256: {}", result.source_sha256);
    if let Some(path) = &result.summary_json {
        println!("Summary: {}", path.display());
    }
    if let Some(path) = &result.cleaned_csv {
        println!("Cleaned: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Quality"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_rows),
        Cell::new(summary.valid_rows),
        count_cell(summary.invalid_rows(), Color::Red),
        count_cell(summary.error_count, Color::Red),
        count_cell(summary.warning_count, Color::Yellow),
        quality_cell(summary.quality_score()),
    ]);
    println!("{table}");

    print_column_table(summary);
    print_issue_table(summary);
}

fn print_column_table(summary: &ValidationSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Column")]);
    apply_table_style(&mut table);
    for stat in &summary.column_stats {
        let column = match &stat.mapped_to {
            Some(column) => Cell::new(column).fg(Color::Green),
            None => Cell::new("unmapped").fg(Color::Red),
        };
        table.add_row(vec![Cell::new(&stat.label), column]);
    }
    println!();
    println!("Columns:");
    println!("{table}");
}

fn print_issue_table(summary: &ValidationSummary) {
    if summary.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for issue in &summary.issues {
        table.add_row(vec![
            Cell::new(issue.row),
            severity_cell(issue.severity),
            field_cell(issue.field),
            value_cell(&issue.value),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_ingest(outcome: &IngestOutcome) {
    match outcome {
        IngestOutcome::Accepted {
            source,
            batch,
            written,
        } => {
            println!("Tape: {}", source.display());
            println!("Accepted: {} records", batch.len());
            if !batch.date_substitutions.is_empty() {
                println!(
                    "Origination dates substituted: {} (rows {})",
                    batch.date_substitutions.len(),
                    batch
                        .date_substitutions
                        .iter()
                        .map(|substitution| substitution.row.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            for path in written {
                println!("Wrote: {}", path.display());
            }
        }
        IngestOutcome::Rejected { source, rejection } => {
            println!("Tape: {}", source.display());
            eprintln!("Rejected: {rejection}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: CanonicalField) -> Cell {
    Cell::new(field.as_str()).fg(Color::Blue)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn quality_cell(score: Option<f64>) -> Cell {
    match score {
        Some(score) if score >= 100.0 => Cell::new(format!("{score:.1}%")).fg(Color::Green),
        Some(score) => Cell::new(format!("{score:.1}%")).fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn value_cell(value: &CellValue) -> Cell {
    if value.is_blank() {
        dim_cell("(blank)")
    } else {
        Cell::new(value.as_text())
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
