//! Loan tape data model.
//!
//! Shared types for every stage of the tape pipeline:
//!
//! - **Cells and rows** ([`CellValue`], [`TapeRow`], [`TapeTable`]): loosely typed
//!   spreadsheet input as produced by a tabular decoder
//! - **Canonical fields** ([`CanonicalField`]): the fixed set of loan attributes the
//!   pipeline understands, with labels and ordered alias tables
//! - **Mappings** ([`ColumnMapping`]): inferred field-to-column correspondence
//! - **Issues** ([`ValidationIssue`], [`ValidationSummary`]): the validator's report
//! - **Loan records** ([`LoanRecord`], [`LoanStatus`]): typed strict-ingest output

#![deny(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod issue;
pub mod loan;
pub mod mapping;

pub use cell::{CellValue, CleanedRow, RawRow, TapeRow, TapeTable};
pub use error::{ModelError, Result};
pub use field::{CanonicalField, INGEST_FIELDS, US_STATE_CODES, VALIDATION_FIELDS, is_us_state_code};
pub use issue::{ColumnStat, Severity, ValidationIssue, ValidationSummary};
pub use loan::{LoanRecord, LoanStatus};
pub use mapping::ColumnMapping;
