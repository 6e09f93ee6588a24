//! MARC-style record representation
//!
//! Records arrive pre-parsed from the ingestion pipeline as a mapping from
//! field tag to the ordered occurrences of that tag, each occurrence being a
//! mapping from subfield code to value. Repeatable tags keep their occurrence
//! order: for the cataloging-history tag the first occurrence is the original
//! entry and the last is the most recent update.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One occurrence of a data field: subfield code to value.
///
/// Subfield codes are strings rather than single characters because the
/// discipline field carries language-qualified codes such as `spa`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOccurrence {
    subfields: HashMap<String, String>,
}

impl FieldOccurrence {
    /// Get a subfield value by code
    pub fn get(&self, code: &str) -> Option<&str> {
        self.subfields.get(code).map(String::as_str)
    }

    /// Set a subfield value, replacing any previous value for the code
    pub fn set(&mut self, code: impl Into<String>, value: impl Into<String>) {
        self.subfields.insert(code.into(), value.into());
    }
}

impl<C, V> FromIterator<(C, V)> for FieldOccurrence
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        Self {
            subfields: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }
}

/// A MARC-style record: field tag to ordered occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarcRecord {
    fields: HashMap<String, Vec<FieldOccurrence>>,
}

impl MarcRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence of a tag, preserving occurrence order
    pub fn push(&mut self, tag: impl Into<String>, occurrence: FieldOccurrence) {
        self.fields.entry(tag.into()).or_default().push(occurrence);
    }

    /// All occurrences of a tag, empty when the tag is absent
    pub fn occurrences(&self, tag: &str) -> &[FieldOccurrence] {
        self.fields.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First occurrence of a tag
    pub fn first(&self, tag: &str) -> Option<&FieldOccurrence> {
        self.occurrences(tag).first()
    }

    /// Last occurrence of a tag
    pub fn last(&self, tag: &str) -> Option<&FieldOccurrence> {
        self.occurrences(tag).last()
    }

    /// Subfield value from the first occurrence of a tag.
    /// Absent tags and absent subfields both resolve to `None`.
    pub fn subfield(&self, tag: &str, code: &str) -> Option<&str> {
        self.first(tag).and_then(|occ| occ.get(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_tag_is_empty() {
        let record = MarcRecord::new();
        assert!(record.occurrences("222").is_empty());
        assert_eq!(record.subfield("222", "a"), None);
        assert!(record.first("CAT").is_none());
        assert!(record.last("CAT").is_none());
    }

    #[test]
    fn test_occurrence_order_preserved() {
        let mut record = MarcRecord::new();
        record.push("CAT", [("c", "20100101")].into_iter().collect());
        record.push("CAT", [("c", "20150615")].into_iter().collect());
        record.push("CAT", [("c", "20200320")].into_iter().collect());

        assert_eq!(record.occurrences("CAT").len(), 3);
        assert_eq!(record.first("CAT").unwrap().get("c"), Some("20100101"));
        assert_eq!(record.last("CAT").unwrap().get("c"), Some("20200320"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let record: MarcRecord = serde_json::from_value(json!({
            "222": [{"a": "Revista mexicana de física"}],
            "650": [
                {"a": "Óptica", "spa": "es"},
                {"a": "Física nuclear", "spa": "es"}
            ]
        }))
        .unwrap();

        assert_eq!(
            record.subfield("222", "a"),
            Some("Revista mexicana de física")
        );
        assert_eq!(record.occurrences("650").len(), 2);
        assert_eq!(record.occurrences("650")[1].get("a"), Some("Física nuclear"));
    }

    #[test]
    fn test_absent_subfield_is_none() {
        let mut record = MarcRecord::new();
        record.push("222", [("a", "Some title")].into_iter().collect());
        assert_eq!(record.subfield("222", "b"), None);
    }
}
