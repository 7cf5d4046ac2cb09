//! FICO score checks.

use std::ops::RangeInclusive;

use tape_model::{CanonicalField, CellValue, ValidationIssue};
use tape_normalize::cell_int;

pub const FICO_RANGE: RangeInclusive<i64> = 300..=850;

/// Only an empty cell counts as missing; whitespace-only text fails the
/// integer parse instead.
pub fn check_fico(row: usize, cell: &CellValue) -> Option<ValidationIssue> {
    let field = CanonicalField::Fico;
    if is_missing(cell) {
        return Some(ValidationIssue::warning(
            row,
            field,
            cell.clone(),
            "Missing FICO score",
        ));
    }
    let Some(score) = cell_int(cell) else {
        return Some(ValidationIssue::warning(
            row,
            field,
            cell.clone(),
            "Invalid FICO score format",
        ));
    };
    (!FICO_RANGE.contains(&score)).then(|| {
        ValidationIssue::error(
            row,
            field,
            cell.clone(),
            format!("FICO score out of range: {score}"),
        )
    })
}

fn is_missing(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty => true,
        CellValue::Text(text) => text.is_empty(),
        CellValue::Number(_) | CellValue::Date(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        assert!(check_fico(2, &CellValue::Number(300.0)).is_none());
        assert!(check_fico(2, &CellValue::Number(850.0)).is_none());

        let low = check_fico(2, &CellValue::Number(299.0)).unwrap();
        assert_eq!(low.message, "FICO score out of range: 299");
        assert!(low.is_error());
        let high = check_fico(2, &CellValue::text("851")).unwrap();
        assert_eq!(high.message, "FICO score out of range: 851");
    }

    #[test]
    fn missing_and_malformed_are_warnings() {
        let missing = check_fico(2, &CellValue::Empty).unwrap();
        assert_eq!(missing.message, "Missing FICO score");
        assert!(!missing.is_error());

        let empty_text = check_fico(2, &CellValue::text("")).unwrap();
        assert_eq!(empty_text.message, "Missing FICO score");

        let malformed = check_fico(2, &CellValue::text("N/A")).unwrap();
        assert_eq!(malformed.message, "Invalid FICO score format");
        assert!(!malformed.is_error());
    }

    #[test]
    fn whitespace_only_is_a_format_warning() {
        let padded = check_fico(2, &CellValue::text("   ")).unwrap();
        assert_eq!(padded.message, "Invalid FICO score format");
        assert!(!padded.is_error());
    }

    #[test]
    fn integer_prefix_is_used() {
        assert!(check_fico(2, &CellValue::text("720 (est)")).is_none());
        assert!(check_fico(2, &CellValue::Number(719.6)).is_none());
    }
}
