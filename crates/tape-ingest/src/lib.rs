//! Tape decoding.
//!
//! Turns a CSV file into a [`TapeTable`](tape_model::TapeTable): a header list
//! plus loosely typed rows. Only UTF-8 input is accepted.

#![deny(unsafe_code)]

pub mod csv;
pub mod error;
mod hash;

pub use crate::csv::{
    MAX_TAPE_FILE_SIZE, check_file_size, check_file_size_with_limit, decode_cell, parse_tape,
    read_tape, validate_encoding,
};
pub use error::{IngestError, Result};
pub use hash::compute_file_hash;
