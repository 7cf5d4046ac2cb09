//! Report writers.
//!
//! - `summary.json`: the validation summary with mapping and source digest
//! - `cleaned.csv`: cleaned rows in source header order
//! - `records-NNNN.json`: strict ingestion output split into fixed-size batches

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tape_model::{CleanedRow, ColumnMapping, LoanRecord, ValidationSummary};

pub const SUMMARY_FILE: &str = "summary.json";
pub const CLEANED_FILE: &str = "cleaned.csv";

/// Serialized validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub source: String,
    /// SHA-256 of the source file, hex encoded.
    pub source_sha256: String,
    pub mapping: ColumnMapping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    pub summary: ValidationSummary,
}

impl SummaryReport {
    pub fn new(
        source: &Path,
        source_sha256: String,
        mapping: ColumnMapping,
        summary: ValidationSummary,
    ) -> Self {
        Self {
            source: source.display().to_string(),
            source_sha256,
            mapping,
            quality_score: summary.quality_score(),
            summary,
        }
    }
}

/// Writes `summary.json` into `dir`.
pub fn write_summary_json(dir: &Path, report: &SummaryReport) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(SUMMARY_FILE);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Writes `cleaned.csv` with one column per header, in header order.
pub fn write_cleaned_csv(dir: &Path, headers: &[String], rows: &[CleanedRow]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(CLEANED_FILE);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(headers)
        .with_context(|| format!("write {}", path.display()))?;
    for row in rows {
        let record: Vec<String> = headers.iter().map(|header| row.text(header)).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(path)
}

/// File name for the 1-based batch `index`.
pub fn batch_file_name(index: usize) -> String {
    format!("records-{index:04}.json")
}

/// Splits `records` into files of at most `batch_size` records each.
///
/// Returns the written paths in order. An empty record set writes nothing.
pub fn write_record_batches(
    dir: &Path,
    records: &[LoanRecord],
    batch_size: usize,
) -> Result<Vec<PathBuf>> {
    if batch_size == 0 {
        bail!("batch size must be at least 1");
    }
    ensure_dir(dir)?;
    let mut written = Vec::new();
    for (index, batch) in records.chunks(batch_size).enumerate() {
        let path = dir.join(batch_file_name(index + 1));
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), batch)
            .with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    tracing::info!(
        records = records.len(),
        files = written.len(),
        batch_size,
        "wrote record batches"
    );
    Ok(written)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create output directory {}", dir.display()))
}
