//! Strict ingestion options.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tape_model::ColumnMapping;

/// What strict ingestion does with an origination date it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Substitute the reference date and report the row.
    #[default]
    FallbackToToday,
    /// Fail the row, which rejects the batch.
    Reject,
}

impl DatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FallbackToToday => "fallback_to_today",
            Self::Reject => "reject",
        }
    }
}

/// Inputs to [`strict_ingest`](crate::strict_ingest) beyond the table itself.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOptions {
    /// Reference date for the date fallback.
    pub today: NaiveDate,
    pub date_policy: DatePolicy,
    pub mapping_override: Option<ColumnMapping>,
}

impl IngestOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            date_policy: DatePolicy::default(),
            mapping_override: None,
        }
    }

    /// Options anchored to the local calendar date.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_date_policy(mut self, date_policy: DatePolicy) -> Self {
        self.date_policy = date_policy;
        self
    }

    pub fn with_mapping_override(mut self, mapping: ColumnMapping) -> Self {
        self.mapping_override = Some(mapping);
        self
    }
}
