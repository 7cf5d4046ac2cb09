//! CSV tape reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tape_model::{TapeRow, TapeTable};
use tracing::{debug, warn};

use super::cell::decode_cell;
use super::header::normalize_headers;
use crate::error::{IngestError, Result};

/// Maximum tape size accepted (500 MB).
pub const MAX_TAPE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_TAPE_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 byte-order marks. A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Loads a CSV tape from disk.
///
/// The first non-blank line is the header row. Fully blank rows are skipped.
/// Short rows are padded with empty cells and long rows truncated to the
/// header width.
pub fn read_tape(path: &Path) -> Result<TapeTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let table = parse_tape(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(table) = table else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "tape loaded"
    );
    Ok(table)
}

/// Parses CSV from any reader. `None` when there is no header row.
pub fn parse_tape<R: Read>(reader: R) -> std::result::Result<Option<TapeTable>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let headers = loop {
        match records.next() {
            None => return Ok(None),
            Some(record) => {
                let record = record?;
                if record.iter().any(|value| !value.trim().is_empty()) {
                    break normalize_headers(record.iter());
                }
            }
        }
    };

    let mut table = TapeTable::new(headers);
    let mut ragged = 0usize;
    for record in records {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if record.len() != table.headers.len() {
            ragged += 1;
        }
        let row: TapeRow = table
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), decode_cell(record.get(idx).unwrap_or(""))))
            .collect();
        table.push_row(row);
    }

    if ragged > 0 {
        warn!(
            rows = ragged,
            columns = table.headers.len(),
            "rows with a different field count than the header were padded or truncated"
        );
    }
    Ok(Some(table))
}
