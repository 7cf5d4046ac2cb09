//! Free-text loan status vocabulary.
//!
//! Servicer tapes spell statuses many ways ("Fully Paid", "30 DPD",
//! "Charged-Off"). Lookup compares on lower-cased alphanumerics only, so
//! punctuation and spacing differences do not matter.

use tape_model::{CellValue, LoanStatus};

/// Known spellings, compared after [`status_key`] normalization.
const STATUS_ALIASES: &[(&str, LoanStatus)] = &[
    ("current", LoanStatus::Current),
    ("performing", LoanStatus::Current),
    ("active", LoanStatus::Current),
    ("open", LoanStatus::Current),
    ("on time", LoanStatus::Current),
    ("in good standing", LoanStatus::Current),
    ("grace", LoanStatus::GracePeriod),
    ("grace period", LoanStatus::GracePeriod),
    ("grace_period", LoanStatus::GracePeriod),
    ("in grace period", LoanStatus::GracePeriod),
    ("1-15 days late", LoanStatus::GracePeriod),
    ("late", LoanStatus::Late30),
    ("late_30", LoanStatus::Late30),
    ("30 days late", LoanStatus::Late30),
    ("30 dpd", LoanStatus::Late30),
    ("16-30 days late", LoanStatus::Late30),
    ("1-30 days late", LoanStatus::Late30),
    ("delinquent", LoanStatus::Late30),
    ("late_60", LoanStatus::Late60),
    ("60 days late", LoanStatus::Late60),
    ("60 dpd", LoanStatus::Late60),
    ("31-60 days late", LoanStatus::Late60),
    ("late_90", LoanStatus::Late90),
    ("90 days late", LoanStatus::Late90),
    ("90 dpd", LoanStatus::Late90),
    ("61-90 days late", LoanStatus::Late90),
    ("90+ days late", LoanStatus::Late90),
    ("seriously delinquent", LoanStatus::Late90),
    ("default", LoanStatus::Default),
    ("defaulted", LoanStatus::Default),
    ("in default", LoanStatus::Default),
    ("charged_off", LoanStatus::ChargedOff),
    ("charged off", LoanStatus::ChargedOff),
    ("charge off", LoanStatus::ChargedOff),
    ("chargeoff", LoanStatus::ChargedOff),
    ("written off", LoanStatus::ChargedOff),
    ("paid_off", LoanStatus::PaidOff),
    ("paid off", LoanStatus::PaidOff),
    ("paid", LoanStatus::PaidOff),
    ("fully paid", LoanStatus::PaidOff),
    ("paid in full", LoanStatus::PaidOff),
    ("closed", LoanStatus::PaidOff),
    ("matured", LoanStatus::PaidOff),
];

fn status_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Looks up a status spelling. `None` for empty or unknown text.
pub fn lookup_status(raw: &str) -> Option<LoanStatus> {
    let key = status_key(raw);
    if key.is_empty() {
        return None;
    }
    STATUS_ALIASES
        .iter()
        .find(|(alias, _)| status_key(alias) == key)
        .map(|(_, status)| *status)
}

/// Status for a cell; empty and unrecognised values read as `current`.
pub fn normalize_status(cell: &CellValue) -> LoanStatus {
    let raw = cell.as_text();
    match lookup_status(&raw) {
        Some(status) => status,
        None => {
            if !raw.trim().is_empty() {
                tracing::debug!(value = %raw, "unrecognised loan status, using current");
            }
            LoanStatus::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for status in LoanStatus::ALL {
            assert_eq!(lookup_status(status.as_str()), Some(status), "{status}");
        }
    }

    #[test]
    fn servicer_spellings() {
        assert_eq!(lookup_status("Fully Paid"), Some(LoanStatus::PaidOff));
        assert_eq!(lookup_status("Charged-Off"), Some(LoanStatus::ChargedOff));
        assert_eq!(lookup_status("30 DPD"), Some(LoanStatus::Late30));
        assert_eq!(lookup_status("In Grace Period"), Some(LoanStatus::GracePeriod));
        assert_eq!(lookup_status("  CURRENT "), Some(LoanStatus::Current));
    }

    #[test]
    fn unknown_and_empty_default_to_current() {
        assert_eq!(lookup_status("bankrupt-ish"), None);
        assert_eq!(normalize_status(&CellValue::text("bankrupt-ish")), LoanStatus::Current);
        assert_eq!(normalize_status(&CellValue::Empty), LoanStatus::Current);
    }

    #[test]
    fn alias_keys_do_not_collide_across_statuses() {
        for (i, (alias, status)) in STATUS_ALIASES.iter().enumerate() {
            for (other, other_status) in &STATUS_ALIASES[i + 1..] {
                if status_key(alias) == status_key(other) {
                    assert_eq!(status, other_status, "{alias} vs {other}");
                }
            }
        }
    }
}
