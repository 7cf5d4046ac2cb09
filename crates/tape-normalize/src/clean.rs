//! Cosmetic row cleaning.
//!
//! Only two columns are touched: the mapped `state` column is trimmed and
//! upper-cased, and the mapped `origination_date` column is rewritten as
//! `YYYY-MM-DD` when it parses. Every other cell passes through unchanged.
//! Cleaning is idempotent.

use tape_model::{CanonicalField, CellValue, CleanedRow, ColumnMapping, TapeRow};

use crate::datetime::{format_iso_date, parse_date_cell};

/// Cleans every row, preserving order and count.
pub fn clean_rows(rows: &[TapeRow], mapping: &ColumnMapping) -> Vec<CleanedRow> {
    let cleaned: Vec<CleanedRow> = rows.iter().map(|row| clean_row(row, mapping)).collect();
    tracing::debug!(rows = cleaned.len(), "cleaned tape rows");
    cleaned
}

/// Cleans a single row.
pub fn clean_row(row: &TapeRow, mapping: &ColumnMapping) -> CleanedRow {
    let mut cleaned = row.clone();

    if let Some(column) = mapping.get(CanonicalField::State)
        && let Some(value) = row.get(column).and_then(clean_state)
    {
        cleaned.insert(column, value);
    }

    if let Some(column) = mapping.get(CanonicalField::OriginationDate)
        && let Some(value) = row.get(column).and_then(clean_date)
    {
        cleaned.insert(column, value);
    }

    cleaned
}

/// Trimmed, upper-cased state value. `None` leaves the cell untouched.
pub fn clean_state(cell: &CellValue) -> Option<CellValue> {
    if !has_content(cell) {
        return None;
    }
    Some(CellValue::Text(cell.as_text().trim().to_uppercase()))
}

/// ISO date text for a parseable date cell. `None` leaves the cell untouched.
pub fn clean_date(cell: &CellValue) -> Option<CellValue> {
    if !has_content(cell) {
        return None;
    }
    parse_date_cell(cell).map(|date| CellValue::Text(format_iso_date(date)))
}

fn has_content(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty => false,
        CellValue::Text(text) => !text.is_empty(),
        CellValue::Number(_) | CellValue::Date(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn mapping() -> ColumnMapping {
        [
            (CanonicalField::State, "st_code"),
            (CanonicalField::OriginationDate, "orig"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn state_is_trimmed_and_uppercased() {
        assert_eq!(clean_state(&CellValue::text(" tx ")), Some(CellValue::text("TX")));
        assert_eq!(clean_state(&CellValue::text("   ")), Some(CellValue::text("")));
        assert_eq!(clean_state(&CellValue::Empty), None);
        assert_eq!(clean_state(&CellValue::text("")), None);
    }

    #[test]
    fn dates_become_iso_text() {
        assert_eq!(
            clean_date(&CellValue::text("01/15/2024")),
            Some(CellValue::text("2024-01-15"))
        );
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(
            clean_date(&CellValue::Date(date)),
            Some(CellValue::text("2023-06-01"))
        );
        assert_eq!(clean_date(&CellValue::text("soon")), None);
        assert_eq!(clean_date(&CellValue::Number(45000.0)), None);
    }

    #[test]
    fn unmapped_columns_pass_through() {
        let row: TapeRow = [("st_code", " ca"), ("orig", "junk"), ("state", " ny ")]
            .into_iter()
            .collect();
        let cleaned = clean_row(&row, &mapping());

        assert_eq!(cleaned.get("st_code"), Some(&CellValue::text("CA")));
        assert_eq!(cleaned.get("orig"), Some(&CellValue::text("junk")));
        assert_eq!(cleaned.get("state"), Some(&CellValue::text(" ny ")));
    }

    #[test]
    fn mapped_column_absent_from_row_is_not_added() {
        let row: TapeRow = [("loan_id", "L1")].into_iter().collect();
        let cleaned = clean_row(&row, &mapping());
        assert_eq!(cleaned, row);
    }
}
