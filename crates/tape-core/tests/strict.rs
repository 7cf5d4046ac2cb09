use chrono::NaiveDate;
use tape_core::{
    DatePolicy, IngestOptions, IngestRejection, MAX_REPORTED_ERRORS, strict_ingest,
};
use tape_model::{CanonicalField, CellValue, ColumnMapping, LoanStatus, TapeRow, TapeTable};

const HEADERS: [&str; 8] = [
    "Loan ID",
    "Original Amount",
    "Current Balance",
    "Interest Rate",
    "Term",
    "Origination Date",
    "Status",
    "FICO",
];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn options() -> IngestOptions {
    IngestOptions::new(today())
}

fn tape(rows: Vec<[CellValue; 8]>) -> TapeTable {
    let mut table = TapeTable::new(HEADERS.iter().map(|h| (*h).to_string()).collect());
    for cells in rows {
        let row: TapeRow = HEADERS.iter().copied().zip(cells).collect();
        table.push_row(row);
    }
    table
}

fn good_row(id: &str) -> [CellValue; 8] {
    [
        id.into(),
        25_000.0.into(),
        18_250.5.into(),
        11.99.into(),
        60.0.into(),
        "2023-04-01".into(),
        "Current".into(),
        712.0.into(),
    ]
}

#[test]
fn converts_every_row_when_all_pass() {
    let mut late = good_row("L2");
    late[6] = "30 days late".into();
    late[5] = "04/15/2023".into();

    let batch = strict_ingest(&tape(vec![good_row("L1"), late]), &options()).unwrap();

    assert_eq!(batch.len(), 2);
    let first = &batch.records[0];
    assert_eq!(first.loan_id, "L1");
    assert_eq!(first.principal, 25_000.0);
    assert_eq!(first.current_balance, 18_250.5);
    assert_eq!(first.interest_rate, 11.99);
    assert_eq!(first.term_months, 60);
    assert_eq!(
        first.origination_date,
        NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
    );
    assert_eq!(first.status, LoanStatus::Current);
    assert_eq!(first.fico, Some(712));

    let second = &batch.records[1];
    assert_eq!(second.status, LoanStatus::Late30);
    assert_eq!(
        second.origination_date,
        NaiveDate::from_ymd_opt(2023, 4, 15).unwrap()
    );
    assert!(batch.date_substitutions.is_empty());
    assert_eq!(batch.mapping.get(CanonicalField::TermMonths), Some("Term"));
}

#[test]
fn unknown_status_defaults_to_current() {
    let mut row = good_row("L1");
    row[6] = "Bankruptcy Review".into();
    let batch = strict_ingest(&tape(vec![row]), &options()).unwrap();
    assert_eq!(batch.records[0].status, LoanStatus::Current);
}

#[test]
fn missing_required_columns_reject_before_rows() {
    let mut table = TapeTable::new(vec![
        "Loan ID".to_string(),
        "Original Amount".to_string(),
        "Interest Rate".to_string(),
    ]);
    // Would fail row checks too; only the mapping problem is reported.
    table.push_row([("Loan ID", "")].into_iter().collect());

    let rejection = strict_ingest(&table, &options()).unwrap_err();

    let IngestRejection::MissingColumns(missing) = rejection else {
        panic!("expected missing columns");
    };
    let fields: Vec<_> = missing.iter().map(|m| m.field).collect();
    assert_eq!(
        fields,
        vec![
            CanonicalField::Balance,
            CanonicalField::OriginationDate,
            CanonicalField::TermMonths,
        ]
    );
}

#[test]
fn missing_column_carries_suggestion() {
    let mut table = tape(vec![good_row("L1")]);
    for header in &mut table.headers {
        if header == "Term" {
            *header = "Trm Mnths".to_string();
        }
    }
    table.rows = Vec::new();

    let Err(IngestRejection::MissingColumns(missing)) = strict_ingest(&table, &options()) else {
        panic!("expected missing columns");
    };
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].field, CanonicalField::TermMonths);
    assert_eq!(missing[0].suggestion.as_deref(), Some("Trm Mnths"));
}

#[test]
fn one_bad_row_rejects_the_batch() {
    let mut bad = good_row("L2");
    bad[1] = 0.0.into();
    bad[3] = 101.0.into();

    let rejection = strict_ingest(&tape(vec![good_row("L1"), bad]), &options()).unwrap_err();

    let IngestRejection::InvalidRows(errors) = &rejection else {
        panic!("expected row errors");
    };
    assert_eq!(
        errors.errors,
        vec![
            "Row 3: Principal must be greater than 0".to_string(),
            "Row 3: Interest rate must be between 0 and 100".to_string(),
        ]
    );
    assert_eq!(errors.failed_rows, 1);
    assert_eq!(errors.total, 2);
}

#[test]
fn structural_boundaries() {
    let mut edge = good_row("L1");
    edge[2] = 0.0.into();
    edge[3] = 0.0.into();
    let mut top = good_row("L2");
    top[3] = 100.0.into();
    let batch = strict_ingest(&tape(vec![edge, top]), &options()).unwrap();
    assert_eq!(batch.len(), 2);

    let mut negative = good_row("L3");
    negative[2] = (-1.0).into();
    negative[4] = 0.0.into();
    let Err(IngestRejection::InvalidRows(errors)) = strict_ingest(&tape(vec![negative]), &options())
    else {
        panic!("expected row errors");
    };
    assert_eq!(
        errors.errors,
        vec![
            "Row 2: Current balance cannot be negative".to_string(),
            "Row 2: Term must be greater than 0".to_string(),
        ]
    );
}

#[test]
fn unparseable_numbers_fail_their_checks() {
    let mut row = good_row("L1");
    row[1] = "$25,000".into();
    row[4] = "five years".into();
    let Err(IngestRejection::InvalidRows(errors)) = strict_ingest(&tape(vec![row]), &options())
    else {
        panic!("expected row errors");
    };
    assert_eq!(
        errors.errors,
        vec![
            "Row 2: Invalid principal amount".to_string(),
            "Row 2: Invalid term".to_string(),
        ]
    );
}

#[test]
fn error_list_is_capped() {
    let rows: Vec<_> = (0..25).map(|_| good_row(" ")).collect();

    let rejection = strict_ingest(&tape(rows), &options()).unwrap_err();

    let IngestRejection::InvalidRows(errors) = &rejection else {
        panic!("expected row errors");
    };
    assert_eq!(errors.errors.len(), MAX_REPORTED_ERRORS);
    assert_eq!(errors.total, 25);
    assert_eq!(errors.failed_rows, 25);
    assert_eq!(errors.errors[0], "Row 2: Missing loan ID");
    assert!(rejection.to_string().ends_with("... and 5 more errors"));
    assert_eq!(
        rejection.reasons().last().map(String::as_str),
        Some("... and 5 more errors")
    );
}

#[test]
fn unparseable_date_falls_back_to_today_and_is_reported() {
    let mut row = good_row("L1");
    row[5] = "sometime last spring".into();

    let batch = strict_ingest(&tape(vec![row]), &options()).unwrap();

    assert_eq!(batch.records[0].origination_date, today());
    assert_eq!(batch.date_substitutions.len(), 1);
    assert_eq!(batch.date_substitutions[0].row, 2);
    assert_eq!(
        batch.date_substitutions[0].value,
        CellValue::text("sometime last spring")
    );
}

#[test]
fn reject_policy_turns_fallback_into_row_error() {
    let mut row = good_row("L1");
    row[5] = CellValue::Empty;
    let options = options().with_date_policy(DatePolicy::Reject);

    let Err(IngestRejection::InvalidRows(errors)) = strict_ingest(&tape(vec![row]), &options)
    else {
        panic!("expected row errors");
    };
    assert_eq!(errors.errors, vec!["Row 2: Unparseable origination date".to_string()]);
}

#[test]
fn override_can_rescue_an_unmatched_column() {
    let mut table = tape(vec![good_row("L1")]);
    table.headers[4] = "Tenor".to_string();
    let rows = std::mem::take(&mut table.rows);
    for row in rows {
        let renamed: TapeRow = row
            .iter()
            .map(|(column, value)| {
                let column = if column == "Term" { "Tenor" } else { column };
                (column.to_string(), value.clone())
            })
            .collect();
        table.push_row(renamed);
    }
    let mut mapping = ColumnMapping::new();
    mapping.insert(CanonicalField::TermMonths, "Tenor");

    let batch = strict_ingest(&table, &options().with_mapping_override(mapping)).unwrap();

    assert_eq!(batch.records[0].term_months, 60);
}
