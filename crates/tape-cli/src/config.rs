//! TOML configuration for the `loan-tape` binary.
//!
//! ```toml
//! [mapping]
//! loan_id = "Loan #"
//! fico = "FICO at Orig"
//!
//! [ingest]
//! date_policy = "reject"
//!
//! [output]
//! batch_size = 250
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tape_core::DatePolicy;
use tape_model::{CanonicalField, ColumnMapping};
use thiserror::Error;

/// Records per output file unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown field '{field}' in [mapping]")]
    UnknownField { field: String },

    #[error("[output] batch_size must be at least 1")]
    InvalidBatchSize,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TapeConfig {
    /// Canonical field name to source column.
    pub mapping: BTreeMap<String, String>,
    pub ingest: IngestSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestSection {
    pub date_policy: DatePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub batch_size: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl TapeConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|error| match error {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(error) => error,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<Self, ParseFailure> {
        let config: Self = toml::from_str(content).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.mapping_override()?;
        if self.output.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        Ok(())
    }

    /// The `[mapping]` table as a mapping override; `None` when empty.
    pub fn mapping_override(&self) -> Result<Option<ColumnMapping>, ConfigError> {
        if self.mapping.is_empty() {
            return Ok(None);
        }
        let mut mapping = ColumnMapping::new();
        for (field, column) in &self.mapping {
            let canonical: CanonicalField = field.parse().map_err(|_| ConfigError::UnknownField {
                field: field.clone(),
            })?;
            mapping.insert(canonical, column.clone());
        }
        Ok(Some(mapping))
    }
}

#[derive(Debug)]
enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}
