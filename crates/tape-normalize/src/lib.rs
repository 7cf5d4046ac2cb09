//! Loan tape normalization.
//!
//! Stateless helpers shared by the quick validator and strict ingestion:
//!
//! - [`numeric`]: prefix-based float and integer coercion for loosely typed cells
//! - [`datetime`]: generic date parsing plus strict ingestion's date coercion
//! - [`status`]: free-text status vocabulary
//! - [`clean`]: the cosmetic row cleaner (state casing, ISO dates)

#![deny(unsafe_code)]

pub mod clean;
pub mod datetime;
pub mod numeric;
pub mod status;

pub use clean::{clean_date, clean_row, clean_rows, clean_state};
pub use datetime::{
    CoercedDate, DateSource, coerce_ingest_date, format_iso_date, parse_date_cell, parse_date_text,
    parse_slash_mdy,
};
pub use numeric::{cell_float, cell_int, parse_float, parse_int};
pub use status::{lookup_status, normalize_status};
