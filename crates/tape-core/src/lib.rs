//! Loan tape pipelines.
//!
//! Two operations with deliberately different contracts:
//!
//! - [`quick_validate`]: maps, validates, and cleans a tape. Every row comes
//!   back; problems are reported as issues.
//! - [`strict_ingest`]: converts a tape into typed [`LoanRecord`]s. Either every
//!   row converts or the batch is rejected with an [`IngestRejection`].
//!
//! [`LoanRecord`]: tape_model::LoanRecord

#![deny(unsafe_code)]

mod error;
mod options;
mod quick;
mod strict;

pub use error::{IngestRejection, MAX_REPORTED_ERRORS, MissingColumn, RowErrors};
pub use options::{DatePolicy, IngestOptions};
pub use quick::{ValidationRun, quick_validate};
pub use strict::{DateSubstitution, IngestBatch, strict_ingest};
