//! Field records
//!
//! A [`FieldRecord`] is one table row as delivered by the loading layer: a
//! mapping from field name to raw cell text. Generated accessor code reads
//! it through the typed helpers here, which apply the conversion runtime's
//! defaulting rule uniformly whether a field is present-but-empty or wholly
//! absent.

use std::hash::Hash;

use ahash::AHashMap;

use crate::convert::{parse_array, parse_map, parse_scalar, FromCell};
use crate::error::ConvResult;

/// One row of raw cell text, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRecord {
    fields: AHashMap<String, String>,
}

impl FieldRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's raw text, replacing any previous value
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field's raw text.
    ///
    /// Returns `None` for unknown keys rather than erroring, so callers can
    /// treat absent and present-but-empty fields identically.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names and raw text
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decode a scalar field.
    ///
    /// Absent fields decode exactly like empty cells: the type's zero value.
    pub fn field<T: FromCell>(&self, key: &str) -> ConvResult<T> {
        parse_scalar(self.get(key).unwrap_or(""))
    }

    /// Decode an array field; absent fields decode as the empty array
    pub fn field_array<T: FromCell>(&self, key: &str) -> ConvResult<Vec<T>> {
        parse_array(self.get(key).unwrap_or(""))
    }

    /// Decode a map field; absent fields decode as the empty map
    pub fn field_map<K, V>(&self, key: &str) -> ConvResult<AHashMap<K, V>>
    where
        K: FromCell + Eq + Hash,
        V: FromCell,
    {
        parse_map(self.get(key).unwrap_or(""))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FieldRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldRecord {
        [
            ("id", "101"),
            ("name", "sword"),
            ("rare", "1"),
            ("tags", "2|4|8"),
            ("attrs", "atk=12|def=3"),
            ("note", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_present_and_absent() {
        let record = sample();
        assert_eq!(record.get("name"), Some("sword"));
        assert_eq!(record.get("note"), Some(""));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.iter().count(), record.len());
    }

    #[test]
    fn test_scalar_fields() {
        let record = sample();
        assert_eq!(record.field::<u32>("id").unwrap(), 101);
        assert_eq!(record.field::<String>("name").unwrap(), "sword");
        assert_eq!(record.field::<bool>("rare").unwrap(), true);
    }

    #[test]
    fn test_absent_equals_empty() {
        let record = sample();
        // "note" is present but empty, "missing" is not present at all;
        // both decode to the zero value.
        assert_eq!(record.field::<i32>("note").unwrap(), 0);
        assert_eq!(record.field::<i32>("missing").unwrap(), 0);
        assert_eq!(record.field::<bool>("missing").unwrap(), false);
        assert_eq!(record.field::<String>("missing").unwrap(), "");
        assert_eq!(record.field_array::<i32>("missing").unwrap(), Vec::<i32>::new());
        assert!(record.field_map::<String, i32>("missing").unwrap().is_empty());
    }

    #[test]
    fn test_array_and_map_fields() {
        let record = sample();
        assert_eq!(record.field_array::<u8>("tags").unwrap(), vec![2, 4, 8]);
        let attrs = record.field_map::<String, i32>("attrs").unwrap();
        assert_eq!(attrs["atk"], 12);
        assert_eq!(attrs["def"], 3);
    }

    #[test]
    fn test_bad_field_propagates() {
        let record = sample();
        assert!(record.field::<i32>("name").is_err());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = FieldRecord::new();
        record.insert("k", "1");
        record.insert("k", "2");
        assert_eq!(record.len(), 1);
        assert_eq!(record.field::<i32>("k").unwrap(), 2);
    }
}
