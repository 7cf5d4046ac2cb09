//! Lenient numeric coercion for spreadsheet cells.
//!
//! Mirrors the prefix-parsing behaviour spreadsheet exports are usually fed
//! through: leading whitespace is skipped and the longest numeric prefix is
//! accepted, so `"50000abc"` reads as 50000 and `"50,000"` as 50. Text with
//! no numeric prefix (`"$50,000"`, `"N/A"`) is unparseable.

use tape_model::CellValue;

/// Parses the longest floating-point prefix of `value`.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and the literal `Infinity`.
pub fn parse_float(value: &str) -> Option<f64> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let infinite = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -infinite } else { infinite });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Parses the longest base-10 integer prefix of `value`.
pub fn parse_int(value: &str) -> Option<i64> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    text[..end].parse().ok()
}

/// Floating-point value of a cell.
///
/// Numbers pass through; text is prefix-parsed; empty and date cells are
/// unparseable.
pub fn cell_float(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => (!value.is_nan()).then_some(*value),
        CellValue::Text(text) => parse_float(text),
        CellValue::Empty | CellValue::Date(_) => None,
    }
}

/// Integer value of a cell; fractional numbers truncate toward zero.
pub fn cell_int(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Number(value) if value.is_finite() => {
            let truncated = value.trunc();
            (truncated >= i64::MIN as f64 && truncated <= i64::MAX as f64)
                .then_some(truncated as i64)
        }
        CellValue::Number(_) => None,
        CellValue::Text(text) => parse_int(text),
        CellValue::Empty | CellValue::Date(_) => None,
    }
}
