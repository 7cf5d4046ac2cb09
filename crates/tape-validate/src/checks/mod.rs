//! Per-field row checks.
//!
//! Each module checks one field. [`run_row`] applies them in a fixed order and
//! only for mapped fields; a mapped column that is absent from a row reads as
//! an empty cell.

mod amount;
mod credit;
mod dates;
mod identifier;
mod location;

pub use amount::{HIGH_PRINCIPAL, HIGH_RATE, MAX_RATE, check_principal, check_rate};
pub use credit::{FICO_RANGE, check_fico};
pub use dates::check_origination_date;
pub use identifier::DuplicateTracker;

use tape_model::{CanonicalField, CellValue, ColumnMapping, TapeRow, ValidationIssue};

/// Runs every applicable check against one row, appending to `issues`.
pub fn run_row(
    row: &TapeRow,
    row_number: usize,
    mapping: &ColumnMapping,
    tracker: &mut DuplicateTracker,
    issues: &mut Vec<ValidationIssue>,
) {
    let empty = CellValue::Empty;
    let cell = |field: CanonicalField| {
        mapping
            .get(field)
            .map(|column| row.get(column).unwrap_or(&empty))
    };

    // 1. Loan ID presence, then duplicates
    if let Some(value) = cell(CanonicalField::LoanId) {
        issues.extend(identifier::check(row_number, value, tracker));
    }

    // 2. Principal
    if let Some(value) = cell(CanonicalField::Principal) {
        issues.extend(check_principal(row_number, value));
    }

    // 3. Interest rate
    if let Some(value) = cell(CanonicalField::Rate) {
        issues.extend(check_rate(row_number, value));
    }

    // 4. FICO
    if let Some(value) = cell(CanonicalField::Fico) {
        issues.extend(check_fico(row_number, value));
    }

    // 5. State code
    if let Some(value) = cell(CanonicalField::State) {
        issues.extend(location::check_state(row_number, value));
    }

    // 6. Origination date format
    if let Some(value) = cell(CanonicalField::OriginationDate) {
        issues.extend(check_origination_date(row_number, value));
    }
}
