//! File-driven translation commands and output helpers.

use serde::Serialize;
use serde_json::Value;
use splice_transform::{transform_entitlements_to_rcs, DataTransforms};
use splice_types::{Consumer, MalformedRecord, MarketingProductUsage, RcsEntitlement, Translation};
use std::path::Path;
use tracing::{info, warn};

use crate::config::ToolConfig;
use crate::error::{ToolError, ToolResult};

/// Reads a JSON file of upstream records.
///
/// The file holds an array of records; a single object counts as a
/// one-record list.
pub fn read_records(path: &Path) -> ToolResult<Vec<Value>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ToolError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|source| ToolError::InputFormat {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Logs each rejected record and returns how many there were.
pub fn report_rejected(rejected: &[MalformedRecord]) -> usize {
    for record in rejected {
        warn!("Skipping {}", record);
    }
    rejected.len()
}

/// Pretty-prints a value as JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> ToolResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Converts a file of Katello consumers into RCS usage records.
pub fn rcs_usage_from_file(
    config: &ToolConfig,
    path: &Path,
) -> ToolResult<Translation<MarketingProductUsage>> {
    let items = read_records(path)?;
    let transforms = DataTransforms::new(config.transform_config());
    let batch = transforms.transform_all_to_rcs(&items);
    info!(
        "Translated {} of {} consumers to usage records",
        batch.records.len(),
        items.len()
    );
    Ok(batch)
}

/// Converts a file of Spacewalk system details into consumers.
pub fn consumers_from_file(config: &ToolConfig, path: &Path) -> ToolResult<Translation<Consumer>> {
    let items = read_records(path)?;
    let transforms = DataTransforms::new(config.transform_config());
    let batch = transforms.transform_systems(&items, config.fact_translator());
    info!("Translated {} systems to consumers", batch.records.len());
    Ok(batch)
}

/// Renames fetched entitlements for RCS.
pub fn entitlements_for_rcs(entitlements: &[Value]) -> Translation<RcsEntitlement> {
    transform_entitlements_to_rcs(entitlements)
}
