//! Loan identifier presence and uniqueness.

use std::collections::BTreeMap;

use tape_model::{CanonicalField, CellValue, ValidationIssue};

/// First-seen row number per trimmed loan ID.
///
/// Threaded through the row loop so duplicate detection stays an explicit
/// input rather than hidden state.
#[derive(Debug, Clone, Default)]
pub struct DuplicateTracker {
    first_seen: BTreeMap<String, usize>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` at `row` and returns the earlier row if it was already seen.
    ///
    /// The first occurrence is kept; later sightings never overwrite it.
    pub fn observe(&mut self, id: &str, row: usize) -> Option<usize> {
        match self.first_seen.get(id) {
            Some(first) => Some(*first),
            None => {
                self.first_seen.insert(id.to_string(), row);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}

pub fn check(
    row: usize,
    cell: &CellValue,
    tracker: &mut DuplicateTracker,
) -> Option<ValidationIssue> {
    let raw = cell.as_text();
    let id = raw.trim();
    if id.is_empty() {
        return Some(ValidationIssue::error(
            row,
            CanonicalField::LoanId,
            cell.clone(),
            "Missing loan ID",
        ));
    }
    tracker.observe(id, row).map(|first| {
        ValidationIssue::warning(
            row,
            CanonicalField::LoanId,
            cell.clone(),
            format!("Duplicate loan ID (also on row {first})"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut tracker = DuplicateTracker::new();
        assert_eq!(tracker.observe("L1", 2), None);
        assert_eq!(tracker.observe("L1", 5), Some(2));
        assert_eq!(tracker.observe("L1", 9), Some(2));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn ids_are_case_sensitive_and_trimmed() {
        let mut tracker = DuplicateTracker::new();
        assert!(check(2, &CellValue::text(" L1 "), &mut tracker).is_none());
        assert!(check(3, &CellValue::text("l1"), &mut tracker).is_none());
        let issue = check(4, &CellValue::text("L1"), &mut tracker).unwrap();
        assert_eq!(issue.message, "Duplicate loan ID (also on row 2)");
        assert!(!issue.is_error());
    }

    #[test]
    fn blank_id_is_an_error_and_not_tracked() {
        let mut tracker = DuplicateTracker::new();
        let issue = check(2, &CellValue::text("   "), &mut tracker).unwrap();
        assert_eq!(issue.message, "Missing loan ID");
        assert!(issue.is_error());
        assert!(tracker.is_empty());
    }

    #[test]
    fn numeric_ids_compare_by_text() {
        let mut tracker = DuplicateTracker::new();
        assert!(check(2, &CellValue::Number(1001.0), &mut tracker).is_none());
        assert!(check(3, &CellValue::text("1001"), &mut tracker).is_some());
    }
}
