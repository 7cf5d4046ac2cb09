//! Canonical-field to source-column mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Inferred correspondence between canonical fields and source headers.
///
/// Only matched fields are present; an unmapped field is absent rather than
/// mapped to an empty name. Iteration follows canonical field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    columns: BTreeMap<CanonicalField, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source column mapped to `field`, if any.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Records a mapping. Blank column names are ignored.
    pub fn insert(&mut self, field: CanonicalField, column: impl Into<String>) {
        let column = column.into();
        if column.trim().is_empty() {
            return;
        }
        self.columns.insert(field, column);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.columns.iter().map(|(field, column)| (*field, column.as_str()))
    }

    /// Fields from `fields` that have no mapping, in the given order.
    pub fn missing<'f>(
        &self,
        fields: impl IntoIterator<Item = &'f CanonicalField>,
    ) -> Vec<CanonicalField> {
        fields
            .into_iter()
            .copied()
            .filter(|field| !self.contains(*field))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(CanonicalField, S)> for ColumnMapping {
    fn from_iter<I: IntoIterator<Item = (CanonicalField, S)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (field, column) in iter {
            mapping.insert(field, column);
        }
        mapping
    }
}
