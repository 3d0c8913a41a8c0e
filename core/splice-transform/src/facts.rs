//! Spacewalk system details to subscription-manager facts.

use serde_json::Value;
use splice_types::SystemDetails;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TransformResult;
use crate::mapping::read_mapping_file;

/// Produces subscription-manager facts for one Spacewalk system.
pub trait FactTranslator {
    /// Returns the facts for `details`, keyed by subscription-manager fact name.
    fn translate(&self, details: &SystemDetails) -> BTreeMap<String, String>;
}

impl<F> FactTranslator for F
where
    F: Fn(&SystemDetails) -> BTreeMap<String, String>,
{
    fn translate(&self, details: &SystemDetails) -> BTreeMap<String, String> {
        self(details)
    }
}

/// Renames system detail keys through a `detail: fact` mapping.
///
/// Details with no mapping entry, and null details, are dropped.
#[derive(Debug, Clone, Default)]
pub struct MappedFactTranslator {
    mapping: BTreeMap<String, String>,
}

impl MappedFactTranslator {
    pub fn new(mapping: BTreeMap<String, String>) -> Self {
        Self { mapping }
    }

    /// Loads the mapping from a mapping file.
    pub fn from_file(path: impl AsRef<Path>) -> TransformResult<Self> {
        Ok(Self::new(read_mapping_file(path)?))
    }

    /// Number of mapped detail keys.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl FactTranslator for MappedFactTranslator {
    fn translate(&self, details: &SystemDetails) -> BTreeMap<String, String> {
        details
            .details
            .iter()
            .filter_map(|(key, value)| {
                let fact = self.mapping.get(key)?;
                fact_value(value).map(|v| (fact.clone(), v))
            })
            .collect()
    }
}

fn fact_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
