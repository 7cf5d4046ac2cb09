//! Canonical loan fields and their alias tables.
//!
//! Alias order is significant: the column mapper tries aliases front to back
//! and stops at the first one that matches any header, so earlier aliases win
//! over later ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A semantic loan attribute the pipeline understands regardless of the
/// source spreadsheet's column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    LoanId,
    Principal,
    Balance,
    Rate,
    Fico,
    State,
    OriginationDate,
    Status,
    BorrowerZip,
    TermMonths,
    MaturityDate,
    DtiRatio,
    MonthlyPayment,
    PaymentsMade,
    PaymentsRemaining,
    DaysDelinquent,
}

/// Fields known to the quick validator, in report order.
pub const VALIDATION_FIELDS: [CanonicalField; 8] = [
    CanonicalField::LoanId,
    CanonicalField::Principal,
    CanonicalField::Balance,
    CanonicalField::Rate,
    CanonicalField::Fico,
    CanonicalField::State,
    CanonicalField::OriginationDate,
    CanonicalField::Status,
];

/// Fields known to strict ingestion, in report order.
pub const INGEST_FIELDS: [CanonicalField; 16] = [
    CanonicalField::LoanId,
    CanonicalField::Principal,
    CanonicalField::Balance,
    CanonicalField::Rate,
    CanonicalField::Fico,
    CanonicalField::State,
    CanonicalField::OriginationDate,
    CanonicalField::Status,
    CanonicalField::BorrowerZip,
    CanonicalField::TermMonths,
    CanonicalField::MaturityDate,
    CanonicalField::DtiRatio,
    CanonicalField::MonthlyPayment,
    CanonicalField::PaymentsMade,
    CanonicalField::PaymentsRemaining,
    CanonicalField::DaysDelinquent,
];

impl CanonicalField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoanId => "loan_id",
            Self::Principal => "principal",
            Self::Balance => "balance",
            Self::Rate => "rate",
            Self::Fico => "fico",
            Self::State => "state",
            Self::OriginationDate => "origination_date",
            Self::Status => "status",
            Self::BorrowerZip => "borrower_zip",
            Self::TermMonths => "term_months",
            Self::MaturityDate => "maturity_date",
            Self::DtiRatio => "dti_ratio",
            Self::MonthlyPayment => "monthly_payment",
            Self::PaymentsMade => "payments_made",
            Self::PaymentsRemaining => "payments_remaining",
            Self::DaysDelinquent => "days_delinquent",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::LoanId => "Loan ID",
            Self::Principal => "Original Principal",
            Self::Balance => "Current Balance",
            Self::Rate => "Interest Rate",
            Self::Fico => "FICO Score",
            Self::State => "State",
            Self::OriginationDate => "Origination Date",
            Self::Status => "Loan Status",
            Self::BorrowerZip => "Borrower ZIP",
            Self::TermMonths => "Term (Months)",
            Self::MaturityDate => "Maturity Date",
            Self::DtiRatio => "DTI Ratio",
            Self::MonthlyPayment => "Monthly Payment",
            Self::PaymentsMade => "Payments Made",
            Self::PaymentsRemaining => "Payments Remaining",
            Self::DaysDelinquent => "Days Delinquent",
        }
    }

    /// Whether strict ingestion rejects a tape that leaves this field unmapped.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::LoanId
                | Self::Principal
                | Self::Balance
                | Self::Rate
                | Self::TermMonths
                | Self::OriginationDate
        )
    }

    /// Known header spellings, most preferred first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::LoanId => &[
                "loan_id",
                "loanid",
                "loan_number",
                "loan_no",
                "loan_num",
                "loan_ref",
                "account_number",
                "account_id",
                "note_id",
                "id",
            ],
            Self::Principal => &[
                "principal",
                "original_principal",
                "orig_principal",
                "original_balance",
                "orig_balance",
                "loan_amount",
                "original_amount",
                "orig_amt",
                "funded_amount",
                "amount_funded",
                "amount",
            ],
            Self::Balance => &[
                "current_balance",
                "balance",
                "curr_bal",
                "outstanding_balance",
                "unpaid_balance",
                "remaining_balance",
                "upb",
            ],
            Self::Rate => &[
                "interest_rate",
                "rate",
                "int_rate",
                "note_rate",
                "coupon",
                "apr",
            ],
            Self::Fico => &[
                "fico",
                "fico_score",
                "credit_score",
                "fico_at_origination",
                "score",
            ],
            Self::State => &["state", "borrower_state", "property_state", "state_code"],
            Self::OriginationDate => &[
                "origination_date",
                "orig_date",
                "originated",
                "funded_date",
                "funding_date",
                "date_funded",
                "issue_date",
                "note_date",
                "open_date",
                "start_date",
            ],
            Self::Status => &[
                "status",
                "loan_status",
                "current_status",
                "delinquency_status",
                "performance",
            ],
            Self::BorrowerZip => &[
                "borrower_zip",
                "zip_code",
                "zip",
                "postal_code",
                "zipcode",
            ],
            Self::TermMonths => &[
                "term_months",
                "original_term",
                "loan_term",
                "term",
                "months",
            ],
            Self::MaturityDate => &[
                "maturity_date",
                "maturity",
                "mat_date",
                "final_payment_date",
            ],
            Self::DtiRatio => &["dti_ratio", "dti", "debt_to_income", "debt_ratio"],
            Self::MonthlyPayment => &[
                "monthly_payment",
                "payment_amount",
                "scheduled_payment",
                "installment",
                "pmt",
            ],
            Self::PaymentsMade => &[
                "payments_made",
                "num_payments_made",
                "paid_payments",
                "paid_installments",
            ],
            Self::PaymentsRemaining => &[
                "payments_remaining",
                "remaining_payments",
                "remaining_term",
                "payments_left",
            ],
            Self::DaysDelinquent => &[
                "days_delinquent",
                "days_past_due",
                "dpd",
                "delinquent_days",
                "days_late",
            ],
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        INGEST_FIELDS
            .iter()
            .copied()
            .find(|field| field.as_str() == needle)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// The 50 US states plus the District of Columbia.
pub const US_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

/// Membership test against [`US_STATE_CODES`]; expects an already upper-cased code.
pub fn is_us_state_code(code: &str) -> bool {
    US_STATE_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_fields_prefix_ingest_fields() {
        assert_eq!(&INGEST_FIELDS[..VALIDATION_FIELDS.len()], &VALIDATION_FIELDS);
    }

    #[test]
    fn every_field_has_aliases() {
        for field in INGEST_FIELDS {
            assert!(!field.aliases().is_empty(), "{field} has no aliases");
        }
    }

    #[test]
    fn parses_field_names() {
        assert_eq!(
            "origination_date".parse::<CanonicalField>().unwrap(),
            CanonicalField::OriginationDate
        );
        assert_eq!(" FICO ".parse::<CanonicalField>().unwrap(), CanonicalField::Fico);
        assert!("borrower_name".parse::<CanonicalField>().is_err());
    }

    #[test]
    fn state_codes_include_dc() {
        assert_eq!(US_STATE_CODES.len(), 51);
        assert!(is_us_state_code("DC"));
        assert!(!is_us_state_code("PR"));
    }
}
