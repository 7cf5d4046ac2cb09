//! CSV reading utilities.

mod cell;
mod header;
mod reader;

pub use cell::decode_cell;
pub use header::{normalize_header, normalize_headers};
pub use reader::{
    MAX_TAPE_FILE_SIZE, check_file_size, check_file_size_with_limit, parse_tape, read_tape,
    validate_encoding,
};
