//! Loan tape row validation.
//!
//! Applies per-field rules to mapped rows and aggregates the resulting issues
//! into a [`ValidationSummary`](tape_model::ValidationSummary). Validation is
//! partial-acceptance: rows with errors are counted invalid but never dropped.
//!
//! # Rules
//!
//! | Field | Error | Warning |
//! |-------|-------|---------|
//! | loan_id | blank | duplicate of an earlier row |
//! | principal | unparseable, `<= 0` | `> 10,000,000` |
//! | rate | `< 0`, `> 100` | `> 36` |
//! | fico | outside 300..=850 | blank, unparseable |
//! | state | not a US state or DC | |
//! | origination_date | | contains a space and no dash |

#![deny(unsafe_code)]

pub mod checks;
mod validator;

pub use checks::DuplicateTracker;
pub use validator::{column_stats, row_number, validate_rows};
