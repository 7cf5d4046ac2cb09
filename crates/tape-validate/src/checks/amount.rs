//! Principal and interest rate checks.

use tape_model::{CanonicalField, CellValue, ValidationIssue};
use tape_normalize::cell_float;

/// Principal above this is flagged for review.
pub const HIGH_PRINCIPAL: f64 = 10_000_000.0;
/// Rates above this percentage are flagged for review.
pub const HIGH_RATE: f64 = 36.0;
/// Hard upper bound for an interest rate percentage.
pub const MAX_RATE: f64 = 100.0;

/// At most one principal issue per row.
pub fn check_principal(row: usize, cell: &CellValue) -> Option<ValidationIssue> {
    let field = CanonicalField::Principal;
    let Some(principal) = cell_float(cell) else {
        return Some(ValidationIssue::error(
            row,
            field,
            cell.clone(),
            "Invalid principal amount",
        ));
    };
    if principal <= 0.0 {
        Some(ValidationIssue::error(
            row,
            field,
            cell.clone(),
            "Principal must be greater than 0",
        ))
    } else if principal > HIGH_PRINCIPAL {
        Some(ValidationIssue::warning(
            row,
            field,
            cell.clone(),
            "Unusually high principal",
        ))
    } else {
        None
    }
}

/// Unparseable rates are skipped.
pub fn check_rate(row: usize, cell: &CellValue) -> Option<ValidationIssue> {
    let field = CanonicalField::Rate;
    let rate = cell_float(cell)?;
    if rate < 0.0 {
        Some(ValidationIssue::error(
            row,
            field,
            cell.clone(),
            "Interest rate cannot be negative",
        ))
    } else if rate > MAX_RATE {
        Some(ValidationIssue::error(
            row,
            field,
            cell.clone(),
            "Interest rate exceeds 100%",
        ))
    } else if rate > HIGH_RATE {
        Some(ValidationIssue::warning(
            row,
            field,
            cell.clone(),
            "High interest rate",
        ))
    } else {
        None
    }
}
