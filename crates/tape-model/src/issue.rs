//! Validation issues and the aggregated summary.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::field::CanonicalField;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Row is counted invalid.
    Error,
    /// Informational; does not affect validity.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A single flagged problem tied to one row and one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 1-based spreadsheet row number (the header is row 1).
    pub row: usize,
    pub field: CanonicalField,
    /// Original cell value, before any cleaning.
    pub value: CellValue,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(
        row: usize,
        field: CanonicalField,
        value: CellValue,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field,
            value,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(
        row: usize,
        field: CanonicalField,
        value: CellValue,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field,
            value,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Mapping status of one canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStat {
    pub field: CanonicalField,
    pub label: String,
    pub mapped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_to: Option<String>,
}

/// Totals and issues for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Input row order, then per-row check order.
    pub issues: Vec<ValidationIssue>,
    pub column_stats: Vec<ColumnStat>,
}

impl ValidationSummary {
    pub fn invalid_rows(&self) -> usize {
        self.total_rows - self.valid_rows
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Percentage of valid rows, or `None` for an empty tape.
    pub fn quality_score(&self) -> Option<f64> {
        if self.total_rows == 0 {
            return None;
        }
        Some(self.valid_rows as f64 / self.total_rows as f64 * 100.0)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }
}
