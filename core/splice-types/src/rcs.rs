//! Flattened records consumed by the reporting system.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marketing product usage for one checked-in consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingProductUsage {
    pub splice_server: String,
    pub checkin_date: String,
    pub name: String,
    pub service_level: String,
    pub hostname: String,
    pub instance_identifier: String,
    pub entitlement_status: String,
    pub organization_id: String,
    pub organization_name: String,
    /// Fact names have every `.` rewritten to `_dot_`.
    pub facts: BTreeMap<String, String>,
}

/// An entitlement as reported to RCS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcsEntitlement {
    pub account: Option<String>,
    pub contract: Option<String>,
    pub product: String,
    pub quantity: u64,
}
