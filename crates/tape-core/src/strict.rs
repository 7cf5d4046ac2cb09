//! Strict ingestion: all-or-nothing conversion of a tape into loan records.
//!
//! Unlike quick validation, nothing is accepted partially. The mapping must
//! cover every required field before any row is read, and a single failing
//! row rejects the whole batch.

use serde::{Deserialize, Serialize};
use tape_map::{ColumnMapper, closest_column};
use tape_model::{
    CanonicalField, CellValue, ColumnMapping, INGEST_FIELDS, LoanRecord, TapeRow, TapeTable,
};
use tape_normalize::{
    cell_float, cell_int, coerce_ingest_date, normalize_status, parse_date_cell, parse_slash_mdy,
};
use tape_validate::row_number;
use tracing::{debug, info, warn};

use crate::error::{IngestRejection, MissingColumn, RowErrors};
use crate::options::{DatePolicy, IngestOptions};

/// An origination date replaced by the reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSubstitution {
    pub row: usize,
    pub value: CellValue,
}

/// Records produced by a successful strict ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestBatch {
    pub records: Vec<LoanRecord>,
    pub mapping: ColumnMapping,
    /// Rows whose origination date was not parseable and was replaced.
    pub date_substitutions: Vec<DateSubstitution>,
}

impl IngestBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Converts a tape into typed loan records, or rejects it whole.
///
/// # Errors
///
/// [`IngestRejection::MissingColumns`] when a required field has no column;
/// [`IngestRejection::InvalidRows`] when any row fails a structural check.
pub fn strict_ingest(
    table: &TapeTable,
    options: &IngestOptions,
) -> Result<IngestBatch, IngestRejection> {
    let mapping =
        ColumnMapper::ingestion().resolve(&table.headers, options.mapping_override.as_ref());

    let missing = missing_required(&mapping, &table.headers);
    if !missing.is_empty() {
        warn!(
            missing = missing.len(),
            "tape rejected: required columns are not mapped"
        );
        return Err(IngestRejection::MissingColumns(missing));
    }

    let mut records = Vec::with_capacity(table.rows.len());
    let mut substitutions = Vec::new();
    let mut errors = RowErrors::new();

    for (index, row) in table.rows.iter().enumerate() {
        let number = row_number(index);
        let view = RowView {
            row,
            mapping: &mapping,
        };
        match convert_row(&view, number, options) {
            Ok(converted) => {
                if let Some(substitution) = converted.substitution {
                    warn!(
                        row = number,
                        value = %substitution.value,
                        today = %options.today,
                        "unparseable origination date replaced with reference date"
                    );
                    substitutions.push(substitution);
                }
                records.push(converted.record);
            }
            Err(messages) => {
                errors.failed_rows += 1;
                for message in messages {
                    errors.push(format!("Row {number}: {message}"));
                }
            }
        }
    }

    if !errors.is_empty() {
        warn!(
            failed_rows = errors.failed_rows,
            total_errors = errors.total,
            "tape rejected: rows failed structural checks"
        );
        return Err(IngestRejection::InvalidRows(errors));
    }

    info!(
        records = records.len(),
        date_substitutions = substitutions.len(),
        "strict ingestion complete"
    );
    Ok(IngestBatch {
        records,
        mapping,
        date_substitutions: substitutions,
    })
}

fn missing_required(mapping: &ColumnMapping, headers: &[String]) -> Vec<MissingColumn> {
    mapping
        .missing(INGEST_FIELDS.iter().filter(|field| field.is_required()))
        .into_iter()
        .map(|field| MissingColumn {
            field,
            label: field.label().to_string(),
            suggestion: closest_column(field, headers).map(|suggestion| suggestion.column),
        })
        .collect()
}

/// One row read through the ingestion mapping.
struct RowView<'a> {
    row: &'a TapeRow,
    mapping: &'a ColumnMapping,
}

static EMPTY: CellValue = CellValue::Empty;

impl RowView<'_> {
    fn cell(&self, field: CanonicalField) -> &CellValue {
        self.mapping
            .get(field)
            .and_then(|column| self.row.get(column))
            .unwrap_or(&EMPTY)
    }

    fn float(&self, field: CanonicalField) -> Option<f64> {
        cell_float(self.cell(field))
    }

    fn int(&self, field: CanonicalField) -> Option<i64> {
        cell_int(self.cell(field))
    }

    /// Trimmed text; blank cells read as `None`.
    fn text(&self, field: CanonicalField) -> Option<String> {
        let text = self.cell(field).as_text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

struct ConvertedRow {
    record: LoanRecord,
    substitution: Option<DateSubstitution>,
}

fn convert_row(
    view: &RowView<'_>,
    row_number: usize,
    options: &IngestOptions,
) -> Result<ConvertedRow, Vec<&'static str>> {
    let loan_id = view.text(CanonicalField::LoanId);
    let principal = view.float(CanonicalField::Principal);
    let balance = view.float(CanonicalField::Balance);
    let rate = view.float(CanonicalField::Rate);
    let term = view.int(CanonicalField::TermMonths);
    let origination_cell = view.cell(CanonicalField::OriginationDate);
    let origination = coerce_ingest_date(origination_cell, options.today);

    let mut errors = Vec::new();
    if loan_id.is_none() {
        errors.push("Missing loan ID");
    }
    match principal {
        None => errors.push("Invalid principal amount"),
        Some(value) if value <= 0.0 => errors.push("Principal must be greater than 0"),
        Some(_) => {}
    }
    match balance {
        None => errors.push("Invalid current balance"),
        Some(value) if value < 0.0 => errors.push("Current balance cannot be negative"),
        Some(_) => {}
    }
    match rate {
        None => errors.push("Invalid interest rate"),
        Some(value) if !(0.0..=100.0).contains(&value) => {
            errors.push("Interest rate must be between 0 and 100");
        }
        Some(_) => {}
    }
    match term {
        None => errors.push("Invalid term"),
        Some(value) if value <= 0 => errors.push("Term must be greater than 0"),
        Some(_) => {}
    }
    if origination.is_substituted() && options.date_policy == DatePolicy::Reject {
        errors.push("Unparseable origination date");
    }

    let (Some(loan_id), Some(principal), Some(balance), Some(rate), Some(term)) =
        (loan_id, principal, balance, rate, term)
    else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let substitution = origination.is_substituted().then(|| DateSubstitution {
        row: row_number,
        value: origination_cell.clone(),
    });
    let record = LoanRecord {
        loan_id,
        principal,
        current_balance: balance,
        interest_rate: rate,
        term_months: term,
        origination_date: origination.date,
        status: normalize_status(view.cell(CanonicalField::Status)),
        fico: view.int(CanonicalField::Fico),
        state: view
            .text(CanonicalField::State)
            .map(|state| state.to_uppercase()),
        borrower_zip: view.text(CanonicalField::BorrowerZip),
        maturity_date: optional_date(view.cell(CanonicalField::MaturityDate)),
        dti_ratio: view.float(CanonicalField::DtiRatio),
        monthly_payment: view.float(CanonicalField::MonthlyPayment),
        payments_made: view.int(CanonicalField::PaymentsMade),
        payments_remaining: view.int(CanonicalField::PaymentsRemaining),
        days_delinquent: view.int(CanonicalField::DaysDelinquent),
    };
    debug!(row = row_number, loan_id = %record.loan_id, "row converted");

    Ok(ConvertedRow {
        record,
        substitution,
    })
}

/// Optional dates never fall back to the reference date.
fn optional_date(cell: &CellValue) -> Option<chrono::NaiveDate> {
    parse_date_cell(cell).or_else(|| parse_slash_mdy(&cell.as_text()))
}
