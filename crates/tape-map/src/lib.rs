//! Column mapping for loan tapes.
//!
//! Infers which spreadsheet headers correspond to canonical loan fields using
//! explicit, ordered alias tables and bidirectional substring matching.
//!
//! # Example
//!
//! ```
//! use tape_map::map_columns;
//! use tape_model::CanonicalField;
//!
//! let headers = vec!["loan_number".to_string(), "fico_at_origination".to_string()];
//! let mapping = map_columns(&headers);
//!
//! assert_eq!(mapping.get(CanonicalField::LoanId), Some("loan_number"));
//! assert_eq!(mapping.get(CanonicalField::Fico), Some("fico_at_origination"));
//! assert!(!mapping.contains(CanonicalField::Principal));
//! ```

#![deny(unsafe_code)]

mod engine;
mod normalize;
mod score;

pub use engine::{ColumnMapper, map_columns, map_ingest_columns};
pub use normalize::{HeaderRule, normalize_ingest_header, normalize_text, normalize_validation_header};
pub use score::{SUGGESTION_MIN_SCORE, Suggestion, closest_column, suggest_columns};
