//! Batch results that survive malformed upstream records.

use serde::Serialize;
use std::fmt;

/// Which upstream record type failed to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Product,
    Pool,
    Consumer,
    Entitlement,
    SystemDetails,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Product => "product",
            RecordKind::Pool => "pool",
            RecordKind::Consumer => "consumer",
            RecordKind::Entitlement => "entitlement",
            RecordKind::SystemDetails => "system details",
        };
        f.write_str(name)
    }
}

/// An upstream record that is missing fields or carries invalid values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("malformed upstream {kind} record {}: {reason}", .id.as_deref().unwrap_or("<no id>"))]
pub struct MalformedRecord {
    pub kind: RecordKind,
    /// The record's identifier, when it has one.
    pub id: Option<String>,
    pub reason: String,
}

impl MalformedRecord {
    pub fn new(kind: RecordKind, id: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            reason: reason.into(),
        }
    }

    /// Builds a rejection for a raw JSON item, taking its id from the item.
    pub fn for_value(kind: RecordKind, item: &serde_json::Value, reason: impl Into<String>) -> Self {
        Self::new(kind, record_id(item), reason)
    }
}

/// Extracts the identifier of a raw upstream record (`id`, `uuid`, then `server_id`).
///
/// Numeric ids are rendered as strings.
pub fn record_id(item: &serde_json::Value) -> Option<String> {
    ["id", "uuid", "server_id"]
        .iter()
        .find_map(|key| match item.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Result of translating a batch: good records plus rejected ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<T> {
    pub records: Vec<T>,
    pub rejected: Vec<MalformedRecord>,
}

impl<T> Translation<T> {
    /// Creates an empty batch result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Records the outcome of translating one item.
    pub fn push(&mut self, outcome: Result<T, MalformedRecord>) {
        match outcome {
            Ok(record) => self.records.push(record),
            Err(rejected) => self.rejected.push(rejected),
        }
    }

    /// Returns true if every item translated.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Converts into the translated records, failing on the first rejection.
    pub fn into_strict(self) -> Result<Vec<T>, MalformedRecord> {
        match self.rejected.into_iter().next() {
            Some(rejected) => Err(rejected),
            None => Ok(self.records),
        }
    }
}

impl<T> Default for Translation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Result<T, MalformedRecord>> for Translation<T> {
    fn from_iter<I: IntoIterator<Item = Result<T, MalformedRecord>>>(iter: I) -> Self {
        let mut translation = Self::new();
        for outcome in iter {
            translation.push(outcome);
        }
        translation
    }
}
