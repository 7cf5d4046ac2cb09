use std::path::PathBuf;

use tape_core::{IngestBatch, IngestRejection, ValidationRun};

#[derive(Debug)]
pub struct ValidateResult {
    pub source: PathBuf,
    pub source_sha256: String,
    pub run: ValidationRun,
    pub summary_json: Option<PathBuf>,
    pub cleaned_csv: Option<PathBuf>,
}

impl ValidateResult {
    pub fn has_errors(&self) -> bool {
        self.run.summary.has_errors()
    }
}

#[derive(Debug)]
pub enum IngestOutcome {
    Accepted {
        source: PathBuf,
        batch: IngestBatch,
        written: Vec<PathBuf>,
    },
    Rejected {
        source: PathBuf,
        rejection: IngestRejection,
    },
}

impl IngestOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
