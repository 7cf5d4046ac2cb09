//! Date parsing for spreadsheet cells.
//!
//! Two entry points with different failure behaviour:
//!
//! - [`parse_date_cell`]: generic best-effort parse used by the cleaner;
//!   returns `None` when the value is not recognisable.
//! - [`coerce_ingest_date`]: strict ingestion's coercion, which never fails and
//!   substitutes a reference date (normally today) for unparseable input. The
//!   [`DateSource`] it reports lets callers surface those substitutions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tape_model::CellValue;

/// Date-only layouts, tried in order. Two-digit years come before four-digit
/// years so `1/5/24` is not read as year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-time layouts whose date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses common human and machine date spellings.
///
/// Offsets in RFC 3339 timestamps are resolved to the UTC calendar date.
pub fn parse_date_text(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Some(date);
    }
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.with_timezone(&Utc).date_naive())
}

/// Parses a cell as a date. Numeric cells are never treated as dates.
pub fn parse_date_cell(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(date) => Some(*date),
        CellValue::Text(text) => parse_date_text(text),
        CellValue::Number(_) | CellValue::Empty => None,
    }
}

/// Strict `MM/DD/YYYY`: exactly three `/`-separated numeric parts with a
/// four-digit year. Parts may carry surrounding whitespace.
pub fn parse_slash_mdy(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').map(str::trim).collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(month) && numeric(day) && numeric(year)) || year.len() != 4 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// How [`coerce_ingest_date`] arrived at its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    /// Generic parse succeeded.
    Parsed,
    /// Recovered by the strict `MM/DD/YYYY` split.
    MonthDayYear,
    /// Nothing parsed; the reference date was substituted.
    Substituted,
}

/// Result of ingestion date coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoercedDate {
    pub date: NaiveDate,
    pub source: DateSource,
}

impl CoercedDate {
    pub fn is_substituted(&self) -> bool {
        self.source == DateSource::Substituted
    }
}

/// Coerces a cell to a date for strict ingestion.
///
/// Tries the generic parse, then the strict `MM/DD/YYYY` split, and finally
/// falls back to `today`. The fallback masks bad input as a plausible date;
/// callers should report any [`DateSource::Substituted`] result.
pub fn coerce_ingest_date(cell: &CellValue, today: NaiveDate) -> CoercedDate {
    if let Some(date) = parse_date_cell(cell) {
        return CoercedDate {
            date,
            source: DateSource::Parsed,
        };
    }
    if let Some(date) = parse_slash_mdy(&cell.as_text()) {
        return CoercedDate {
            date,
            source: DateSource::MonthDayYear,
        };
    }
    CoercedDate {
        date: today,
        source: DateSource::Substituted,
    }
}
