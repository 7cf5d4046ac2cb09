//! Quick validation over a whole tape.

use tape_model::{
    CanonicalField, ColumnMapping, ColumnStat, Severity, TapeRow, VALIDATION_FIELDS,
    ValidationSummary,
};

use crate::checks::{DuplicateTracker, run_row};

/// Spreadsheet row number for a 0-based data row index (header is row 1).
pub fn row_number(index: usize) -> usize {
    index + 2
}

/// Validates every row and folds the issues into a summary.
///
/// Never fails: malformed values become issues or are skipped. Rows with
/// errors still count toward `total_rows`.
pub fn validate_rows(rows: &[TapeRow], mapping: &ColumnMapping) -> ValidationSummary {
    let mut tracker = DuplicateTracker::new();
    let mut issues = Vec::new();
    let mut valid_rows = 0;

    for (index, row) in rows.iter().enumerate() {
        let first_issue = issues.len();
        run_row(row, row_number(index), mapping, &mut tracker, &mut issues);
        if !issues[first_issue..].iter().any(|issue| issue.is_error()) {
            valid_rows += 1;
        }
    }

    let error_count = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    tracing::debug!(
        rows = rows.len(),
        valid_rows,
        error_count,
        warning_count,
        "validated tape rows"
    );

    ValidationSummary {
        total_rows: rows.len(),
        valid_rows,
        error_count,
        warning_count,
        issues,
        column_stats: column_stats(mapping),
    }
}

/// Mapping status for each validator field, in canonical order.
pub fn column_stats(mapping: &ColumnMapping) -> Vec<ColumnStat> {
    VALIDATION_FIELDS
        .iter()
        .map(|field| column_stat(*field, mapping))
        .collect()
}

fn column_stat(field: CanonicalField, mapping: &ColumnMapping) -> ColumnStat {
    let mapped_to = mapping.get(field).map(str::to_string);
    ColumnStat {
        field,
        label: field.label().to_string(),
        mapped: mapped_to.is_some(),
        mapped_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tape_has_no_score() {
        let summary = validate_rows(&[], &ColumnMapping::new());
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.quality_score(), None);
        assert_eq!(summary.column_stats.len(), VALIDATION_FIELDS.len());
        assert!(summary.column_stats.iter().all(|stat| !stat.mapped));
    }

    #[test]
    fn unmapped_fields_are_never_checked() {
        let rows: Vec<TapeRow> = vec![[("principal", "-5")].into_iter().collect()];
        let summary = validate_rows(&rows, &ColumnMapping::new());
        assert!(summary.issues.is_empty());
        assert_eq!(summary.valid_rows, 1);
    }

    #[test]
    fn mapped_but_absent_column_reads_empty() {
        let mapping: ColumnMapping = [(CanonicalField::LoanId, "id")].into_iter().collect();
        let rows = vec![TapeRow::new()];
        let summary = validate_rows(&rows, &mapping);
        assert_eq!(summary.issues[0].message, "Missing loan ID");
    }

    #[test]
    fn warnings_do_not_invalidate_rows() {
        let mapping: ColumnMapping = [(CanonicalField::Fico, "fico")].into_iter().collect();
        let rows: Vec<TapeRow> = vec![[("fico", "")].into_iter().collect()];
        let summary = validate_rows(&rows, &mapping);
        assert_eq!(summary.warning_count, 1);
        assert_eq!(summary.valid_rows, 1);
    }
}
