//! Header normalization rules.
//!
//! The quick validator and strict ingestion normalize headers differently:
//! validation keeps underscores, ingestion drops every non-alphanumeric
//! character for a looser match. Existing tapes depend on which columns each
//! rule matches, so the two stay separate.

use serde::{Deserialize, Serialize};

/// Which header normalization a mapper applies to headers and aliases alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRule {
    /// Lower-case, keep `[a-z0-9_]`.
    Validation,
    /// Lower-case, keep `[a-z0-9]`.
    Ingestion,
}

impl HeaderRule {
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Self::Validation => normalize_validation_header(raw),
            Self::Ingestion => normalize_ingest_header(raw),
        }
    }
}

/// Lower-cases and strips everything outside `[a-z0-9_]`.
pub fn normalize_validation_header(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '_')
        .collect()
}

/// Lower-cases and strips everything outside `[a-z0-9]`.
pub fn normalize_ingest_header(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

/// Normalizes free text for fuzzy comparison: lower-case, separators to single spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\', '#'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
