//! Quick validation: partial acceptance over a whole tape.

use serde::{Deserialize, Serialize};
use tape_map::ColumnMapper;
use tape_model::{CleanedRow, ColumnMapping, TapeTable, ValidationSummary};
use tape_normalize::clean_rows;
use tape_validate::validate_rows;
use tracing::info;

/// Everything a quick validation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRun {
    pub mapping: ColumnMapping,
    pub summary: ValidationSummary,
    /// Index-aligned with the input rows; rows with errors are kept.
    pub cleaned_rows: Vec<CleanedRow>,
}

/// Maps, validates, and cleans a tape.
///
/// `existing` is a caller mapping override: its entries win where the column
/// exists in the tape, and the remaining validator fields are auto-mapped.
/// The validator and cleaner both read the raw rows through the same mapping.
pub fn quick_validate(table: &TapeTable, existing: Option<&ColumnMapping>) -> ValidationRun {
    let mapping = ColumnMapper::validation().resolve(&table.headers, existing);
    let summary = validate_rows(&table.rows, &mapping);
    let cleaned_rows = clean_rows(&table.rows, &mapping);

    info!(
        rows = summary.total_rows,
        valid_rows = summary.valid_rows,
        errors = summary.error_count,
        warnings = summary.warning_count,
        mapped_fields = mapping.len(),
        "quick validation complete"
    );

    ValidationRun {
        mapping,
        summary,
        cleaned_rows,
    }
}
