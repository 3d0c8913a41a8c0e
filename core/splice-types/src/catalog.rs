//! Catalog records pulled from Candlepin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version stamped on every rule set fetched from Candlepin.
pub const RULES_VERSION: &str = "0";

/// An engineering product delivered by a marketing product's content sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringProduct {
    pub id: String,
    pub label: String,
    pub name: String,
    pub vendor: String,
}

/// A marketing product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    /// Falls back to `updated` when Candlepin omits it.
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// Product attributes (`type`, `arch`, `name`, ...).
    pub attrs: BTreeMap<String, String>,
    pub eng_prods: Vec<EngineeringProduct>,
    /// Ids of `eng_prods`, same order.
    pub engineering_ids: Vec<String>,
    pub dependent_product_ids: Vec<String>,
}

/// A product provided by a pool, reduced to its id and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidedProduct {
    pub id: String,
    pub name: String,
}

/// A quantity of entitlements available for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub uuid: String,
    /// Account number; Candlepin leaves it unset for some pools.
    pub account: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub quantity: u64,
    pub product_id: String,
    pub product_name: String,
    pub product_attributes: BTreeMap<String, String>,
    pub provided_products: Vec<ProvidedProduct>,
}

impl Pool {
    /// Returns true if the pool is valid at the given instant.
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at <= self.end_date
    }
}

/// The rule engine script served by Candlepin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub version: String,
    /// Decoded script bytes.
    pub data: Vec<u8>,
}

impl Rules {
    /// Wraps decoded rule bytes with the fixed client-side version.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            version: RULES_VERSION.to_string(),
            data,
        }
    }
}

/// An organization as Candlepin reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
