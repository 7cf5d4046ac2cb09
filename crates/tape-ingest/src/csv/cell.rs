//! Cell decoding.

use tape_model::CellValue;

/// Decodes a raw CSV field.
///
/// Blank fields are [`CellValue::Empty`]. A field becomes a
/// [`CellValue::Number`] only when the number prints back as exactly the same
/// text (ignoring surrounding whitespace), so `02134` (a ZIP) and `12.50` stay
/// text and keep their spelling. Text cells are kept verbatim, padding
/// included.
pub fn decode_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() && number.to_string() == trimmed => {
            CellValue::Number(number)
        }
        _ => CellValue::text(raw),
    }
}
