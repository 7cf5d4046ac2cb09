//! Batch rejection reasons for strict ingestion.

use std::fmt;

use serde::{Deserialize, Serialize};
use tape_model::CanonicalField;
use thiserror::Error;

/// Row errors kept in a rejection; the rest are only counted.
pub const MAX_REPORTED_ERRORS: usize = 20;

/// Why a strict ingestion batch produced no records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestRejection {
    /// Required fields have no column; no row was examined.
    #[error("missing required columns: {}", format_missing(.0))]
    MissingColumns(Vec<MissingColumn>),

    /// At least one row failed its structural checks.
    #[error("{0}")]
    InvalidRows(RowErrors),
}

impl IngestRejection {
    /// Individual reasons, one per line of user-facing output.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Self::MissingColumns(missing) => missing.iter().map(ToString::to_string).collect(),
            Self::InvalidRows(rows) => {
                let mut reasons = rows.errors.clone();
                if let Some(tail) = rows.remainder_note() {
                    reasons.push(tail);
                }
                reasons
            }
        }
    }
}

fn format_missing(missing: &[MissingColumn]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A required field the ingestion mapper could not place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingColumn {
    pub field: CanonicalField,
    pub label: String,
    /// Closest header by fuzzy similarity, if any was close enough.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (closest header: \"{suggestion}\")")?;
        }
        Ok(())
    }
}

/// Capped list of `Row N: ...` messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowErrors {
    /// The first [`MAX_REPORTED_ERRORS`] messages, in row order.
    pub errors: Vec<String>,
    /// Every error found, including those not kept.
    pub total: usize,
    /// Number of distinct rows with at least one error.
    pub failed_rows: usize,
}

impl RowErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: String) {
        if self.errors.len() < MAX_REPORTED_ERRORS {
            self.errors.push(message);
        }
        self.total += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Errors counted but not kept.
    pub fn omitted(&self) -> usize {
        self.total - self.errors.len()
    }

    fn remainder_note(&self) -> Option<String> {
        let omitted = self.omitted();
        (omitted > 0).then(|| format!("... and {omitted} more errors"))
    }
}

impl fmt::Display for RowErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} validation error(s) in {} row(s)",
            self.total, self.failed_rows
        )?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        if let Some(note) = self.remainder_note() {
            write!(f, "\n{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_capped_but_counted() {
        let mut errors = RowErrors::new();
        for row in 2..27 {
            errors.push(format!("Row {row}: Missing loan ID"));
        }
        assert_eq!(errors.errors.len(), MAX_REPORTED_ERRORS);
        assert_eq!(errors.total, 25);
        assert_eq!(errors.omitted(), 5);
        assert!(errors.to_string().ends_with("\n... and 5 more errors"));
    }

    #[test]
    fn no_tail_when_nothing_omitted() {
        let mut errors = RowErrors::new();
        errors.push("Row 2: Missing loan ID".to_string());
        errors.failed_rows = 1;
        assert_eq!(
            errors.to_string(),
            "1 validation error(s) in 1 row(s)\nRow 2: Missing loan ID"
        );
    }

    #[test]
    fn missing_columns_render_with_suggestions() {
        let rejection = IngestRejection::MissingColumns(vec![
            MissingColumn {
                field: CanonicalField::TermMonths,
                label: "Term (Months)".to_string(),
                suggestion: Some("Trm".to_string()),
            },
            MissingColumn {
                field: CanonicalField::Balance,
                label: "Current Balance".to_string(),
                suggestion: None,
            },
        ]);
        assert_eq!(
            rejection.to_string(),
            "missing required columns: Term (Months) (closest header: \"Trm\"), Current Balance"
        );
        assert_eq!(rejection.reasons().len(), 2);
    }
}
