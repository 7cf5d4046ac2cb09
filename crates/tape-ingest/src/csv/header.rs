//! Header normalization.

use std::collections::BTreeSet;

/// Trims, strips a stray BOM, and collapses internal whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a whole header row.
///
/// Blank names become `column_N` (1-based position). Repeated names get a
/// `_2`, `_3`, ... suffix so every column stays addressable by name.
pub fn normalize_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    raw.into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let mut name = normalize_header(value);
            if name.is_empty() {
                name = format!("column_{}", idx + 1);
            }
            let mut candidate = name.clone();
            let mut suffix = 2;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{name}_{suffix}");
                suffix += 1;
            }
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize_header("  Loan   ID "), "Loan ID");
        assert_eq!(normalize_header("\u{feff}loan_id"), "loan_id");
        assert_eq!(normalize_header("Curr\tBal"), "Curr Bal");
    }

    #[test]
    fn blanks_and_duplicates_are_named() {
        let headers = normalize_headers(["Loan ID", "", "Rate", "Rate", " ", "Rate"]);
        assert_eq!(
            headers,
            vec!["Loan ID", "column_2", "Rate", "Rate_2", "column_5", "Rate_3"]
        );
    }
}
