//! The record type processed by dedupe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A keyed record with a numeric identifier.
///
/// Records sharing a `key` belong to the same group. The `identifier` only
/// ranks records within a group: the lowest one is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Ranking value; lower wins.
    #[serde(alias = "id")]
    identifier: i64,

    /// Grouping key.
    #[serde(alias = "name")]
    key: String,
}

impl Record {
    /// Create a new record.
    #[must_use]
    pub fn new(identifier: i64, key: impl Into<String>) -> Self {
        Self {
            identifier,
            key: key.into(),
        }
    }

    /// The record's identifier.
    #[must_use]
    pub fn identifier(&self) -> i64 {
        self.identifier
    }

    /// The record's grouping key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record(identifier={}, key={})", self.identifier, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = Record::new(5, "Alice");
        assert_eq!(record.identifier(), 5);
        assert_eq!(record.key(), "Alice");
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(2, "Bob");
        assert_eq!(record.to_string(), "Record(identifier=2, key=Bob)");
    }

    #[test]
    fn test_record_serialize() {
        let json = serde_json::to_string(&Record::new(1, "Charlie")).unwrap();
        assert_eq!(json, r#"{"identifier":1,"key":"Charlie"}"#);
    }

    #[test]
    fn test_record_deserialize_aliases() {
        let record: Record = serde_json::from_str(r#"{"id": 8, "name": "Alice"}"#).unwrap();
        assert_eq!(record, Record::new(8, "Alice"));
    }

    #[test]
    fn test_record_deserialize_missing_key() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"identifier": 8}"#);
        assert!(result.is_err());
    }
}
