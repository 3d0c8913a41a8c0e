//! Consumer shapes on each side of the bridge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product installed on a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledProduct {
    pub product_id: String,
    pub product_name: String,
}

/// One system as exported from Spacewalk.
///
/// Fields other than the ones named here are kept in `details` and handed
/// to the fact translator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDetails {
    pub server_id: String,
    pub org_id: String,
    pub name: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub last_checkin_time: String,
    #[serde(default)]
    pub installed_products: Vec<InstalledProduct>,
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Intermediate consumer built from a Spacewalk system.
///
/// Not accepted by Katello as-is; it is reshaped again before upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumer {
    pub id: String,
    pub facts: BTreeMap<String, String>,
    pub owner: String,
    /// Trimmed of leading and trailing whitespace.
    pub name: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub last_checkin: String,
    pub installed_products: Vec<InstalledProduct>,
}

/// The organization a Katello consumer belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KatelloOwner {
    pub display_name: String,
}

/// The environment a Katello consumer is registered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KatelloEnvironment {
    /// Numeric in Katello responses, a string in some exports.
    pub organization_id: serde_json::Value,
}

/// A consumer as Katello reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KatelloConsumer {
    pub uuid: String,
    pub name: String,
    /// Absent or null when the system never checked in.
    #[serde(default)]
    pub checkin_time: Option<String>,
    #[serde(rename = "serviceLevel")]
    pub service_level: String,
    pub entitlement_status: String,
    pub facts: BTreeMap<String, String>,
    pub environment: KatelloEnvironment,
    pub owner: KatelloOwner,
}

/// An entitlement attached to a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub contract_number: Option<String>,
    pub product_id: String,
    pub quantity: u64,
}
