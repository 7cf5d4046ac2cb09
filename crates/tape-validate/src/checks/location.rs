//! State code checks.

use tape_model::{CanonicalField, CellValue, ValidationIssue, is_us_state_code};

/// Blank states are ignored; the message quotes the original value.
pub fn check_state(row: usize, cell: &CellValue) -> Option<ValidationIssue> {
    let raw = cell.as_text();
    let code = raw.trim().to_uppercase();
    if code.is_empty() || is_us_state_code(&code) {
        return None;
    }
    Some(ValidationIssue::error(
        row,
        CanonicalField::State,
        cell.clone(),
        format!("Invalid state code: {raw}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_insensitive() {
        assert!(check_state(2, &CellValue::text(" tx ")).is_none());
        assert!(check_state(2, &CellValue::text("DC")).is_none());
        assert!(check_state(2, &CellValue::Empty).is_none());
    }

    #[test]
    fn unknown_code_quotes_original() {
        let issue = check_state(2, &CellValue::text(" xx")).unwrap();
        assert_eq!(issue.message, "Invalid state code:  xx");
        assert!(issue.is_error());
        assert!(check_state(2, &CellValue::text("PR")).is_some());
    }
}
