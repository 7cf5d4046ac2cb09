//! Alias-table column mapping.

use tape_model::{CanonicalField, ColumnMapping, INGEST_FIELDS, VALIDATION_FIELDS};
use tracing::{debug, warn};

use crate::normalize::HeaderRule;

/// Maps source headers onto a fixed set of canonical fields.
///
/// For each field, aliases are tried in declared order; the first alias that
/// equals, contains, or is contained in some normalized header claims the
/// first such header. There is no scoring across candidates and no
/// exclusivity: one header may be claimed by several fields.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapper {
    rule: HeaderRule,
    fields: &'static [CanonicalField],
}

struct NormalizedHeader<'a> {
    original: &'a str,
    normalized: String,
}

impl ColumnMapper {
    pub fn new(rule: HeaderRule, fields: &'static [CanonicalField]) -> Self {
        Self { rule, fields }
    }

    /// Mapper used by the quick validator.
    pub fn validation() -> Self {
        Self::new(HeaderRule::Validation, &VALIDATION_FIELDS)
    }

    /// Mapper used by strict ingestion.
    pub fn ingestion() -> Self {
        Self::new(HeaderRule::Ingestion, &INGEST_FIELDS)
    }

    pub fn rule(&self) -> HeaderRule {
        self.rule
    }

    pub fn fields(&self) -> &'static [CanonicalField] {
        self.fields
    }

    /// Infers a mapping for every field this mapper knows.
    ///
    /// Headers that normalize to an empty string (`"#"`, `"()"`, blank) are
    /// skipped and never claimed, since an empty key is contained in every
    /// alias.
    pub fn map(&self, headers: &[String]) -> ColumnMapping {
        let normalized = self.normalize_headers(headers);
        let mut mapping = ColumnMapping::new();
        for &field in self.fields {
            if let Some(column) = self.match_field(field, &normalized) {
                mapping.insert(field, column);
            }
        }
        debug!(
            rule = ?self.rule,
            header_count = headers.len(),
            mapped = mapping.len(),
            "column mapping inferred"
        );
        mapping
    }

    /// Applies a caller override, then auto-maps the fields it leaves open.
    ///
    /// Override entries naming a column that is not in `headers` are dropped.
    /// Override entries for fields outside this mapper's field set are kept
    /// only if the column exists.
    pub fn resolve(&self, headers: &[String], existing: Option<&ColumnMapping>) -> ColumnMapping {
        let Some(existing) = existing else {
            return self.map(headers);
        };

        let mut mapping = ColumnMapping::new();
        for (field, column) in existing.iter() {
            if headers.iter().any(|header| header == column) {
                mapping.insert(field, column);
            } else {
                warn!(
                    field = %field,
                    column,
                    "mapping override names a column not present in the tape; ignoring"
                );
            }
        }

        let normalized = self.normalize_headers(headers);
        for &field in self.fields {
            if mapping.contains(field) {
                continue;
            }
            if let Some(column) = self.match_field(field, &normalized) {
                mapping.insert(field, column);
            }
        }
        debug!(
            rule = ?self.rule,
            overrides = existing.len(),
            mapped = mapping.len(),
            "column mapping resolved"
        );
        mapping
    }

    fn normalize_headers<'a>(&self, headers: &'a [String]) -> Vec<NormalizedHeader<'a>> {
        headers
            .iter()
            .map(|header| NormalizedHeader {
                original: header.as_str(),
                normalized: self.rule.normalize(header),
            })
            // An empty key would be "contained" in every alias.
            .filter(|header| !header.normalized.is_empty())
            .collect()
    }

    fn match_field<'a>(
        &self,
        field: CanonicalField,
        headers: &[NormalizedHeader<'a>],
    ) -> Option<&'a str> {
        field.aliases().iter().find_map(|alias| {
            let alias = self.rule.normalize(alias);
            headers
                .iter()
                .find(|header| matches_alias(&header.normalized, &alias))
                .map(|header| header.original)
        })
    }
}

/// Equality or substring containment in either direction.
fn matches_alias(header: &str, alias: &str) -> bool {
    header == alias || header.contains(alias) || alias.contains(header)
}

/// Maps headers onto the validator's field set.
pub fn map_columns(headers: &[String]) -> ColumnMapping {
    ColumnMapper::validation().map(headers)
}

/// Maps headers onto the full ingestion field set.
pub fn map_ingest_columns(headers: &[String]) -> ColumnMapping {
    ColumnMapper::ingestion().map(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn containment_is_bidirectional() {
        assert!(matches_alias("fico_at_origination", "fico"));
        assert!(matches_alias("rate", "interest_rate"));
        assert!(!matches_alias("loan_number", "loan_id"));
    }

    #[test]
    fn earlier_alias_beats_earlier_header() {
        // "interest_rate" precedes "int_rate" in the alias table, so the
        // later header wins even though "int_rate" appears first.
        let mapping = map_columns(&headers(&["int_rate", "interest_rate"]));
        assert_eq!(mapping.get(CanonicalField::Rate), Some("interest_rate"));
    }

    #[test]
    fn blank_headers_are_never_claimed() {
        let mapping = map_columns(&headers(&["", "###", "principal"]));
        assert_eq!(mapping.get(CanonicalField::Principal), Some("principal"));
        assert!(!mapping.contains(CanonicalField::LoanId));
    }

    #[test]
    fn blank_headers_are_skipped_when_resolving() {
        let existing: ColumnMapping = [(CanonicalField::Fico, "FICO")].into_iter().collect();
        let mapping = ColumnMapper::ingestion()
            .resolve(&headers(&["()", "Loan ID", "FICO"]), Some(&existing));
        assert_eq!(mapping.get(CanonicalField::LoanId), Some("Loan ID"));
        assert!(mapping.iter().all(|(_, column)| column != "()"));
    }

    #[test]
    fn override_wins_and_gaps_are_auto_mapped() {
        let existing: ColumnMapping = [
            (CanonicalField::LoanId, "Account"),
            (CanonicalField::Fico, "not in tape"),
        ]
        .into_iter()
        .collect();
        let mapping = ColumnMapper::validation()
            .resolve(&headers(&["Account", "loan_id", "fico"]), Some(&existing));
        assert_eq!(mapping.get(CanonicalField::LoanId), Some("Account"));
        assert_eq!(mapping.get(CanonicalField::Fico), Some("fico"));
    }
}
