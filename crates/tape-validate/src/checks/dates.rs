//! Origination date format heuristic.
//!
//! A textual check only: values containing a space but no dash look like
//! spelled-out dates ("Jan 5 2024") rather than ISO or numeric formats. No
//! parse is attempted, so impossible dates are not caught here.

use tape_model::{CanonicalField, CellValue, ValidationIssue};

pub fn check_origination_date(row: usize, cell: &CellValue) -> Option<ValidationIssue> {
    let raw = cell.as_text();
    (raw.contains(' ') && !raw.contains('-')).then(|| {
        ValidationIssue::warning(
            row,
            CanonicalField::OriginationDate,
            cell.clone(),
            "Non-standard date format",
        )
    })
}
