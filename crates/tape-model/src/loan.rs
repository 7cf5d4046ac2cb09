//! Typed loan records produced by strict ingestion.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fixed loan status vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Current,
    GracePeriod,
    Late30,
    Late60,
    Late90,
    Default,
    ChargedOff,
    PaidOff,
}

impl LoanStatus {
    pub const ALL: [LoanStatus; 8] = [
        Self::Current,
        Self::GracePeriod,
        Self::Late30,
        Self::Late60,
        Self::Late90,
        Self::Default,
        Self::ChargedOff,
        Self::PaidOff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::GracePeriod => "grace_period",
            Self::Late30 => "late_30",
            Self::Late60 => "late_60",
            Self::Late90 => "late_90",
            Self::Default => "default",
            Self::ChargedOff => "charged_off",
            Self::PaidOff => "paid_off",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical spelling only. Free-text status values go through the
/// ingestion vocabulary lookup instead.
impl FromStr for LoanStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// One canonical loan, ready for downstream storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: String,
    pub principal: f64,
    pub current_balance: f64,
    pub interest_rate: f64,
    pub term_months: i64,
    pub origination_date: NaiveDate,
    pub status: LoanStatus,
    pub fico: Option<i64>,
    pub state: Option<String>,
    pub borrower_zip: Option<String>,
    pub maturity_date: Option<NaiveDate>,
    pub dti_ratio: Option<f64>,
    pub monthly_payment: Option<f64>,
    pub payments_made: Option<i64>,
    pub payments_remaining: Option<i64>,
    pub days_delinquent: Option<i64>,
}
