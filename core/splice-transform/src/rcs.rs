//! Katello consumers and Candlepin entitlements to RCS records.

use serde::Deserialize;
use serde_json::Value;
use splice_types::{
    Entitlement, KatelloConsumer, MalformedRecord, MarketingProductUsage, RcsEntitlement,
    RecordKind, Translation,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::TransformConfig;

/// Fact carrying a consumer's hostname.
pub const HOSTNAME_FACT: &str = "network.hostname";

/// Translator entry point holding the startup configuration.
#[derive(Debug, Clone)]
pub struct DataTransforms {
    config: TransformConfig,
}

impl DataTransforms {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this translator was built with.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Converts a Katello consumer into a marketing product usage record.
    ///
    /// Returns `Ok(None)` for consumers that never checked in; there is
    /// nothing to report for them.
    pub fn transform_to_rcs(
        &self,
        consumer: &KatelloConsumer,
    ) -> Result<Option<MarketingProductUsage>, MalformedRecord> {
        let Some(checkin_date) = consumer.checkin_time.as_ref() else {
            debug!(
                "system entry for {} has no checkin_time, not loading entry into splice db",
                consumer.name
            );
            return Ok(None);
        };

        let malformed = |reason: String| {
            MalformedRecord::new(RecordKind::Consumer, Some(consumer.uuid.clone()), reason)
        };

        let hostname = consumer
            .facts
            .get(HOSTNAME_FACT)
            .ok_or_else(|| malformed(format!("missing fact `{HOSTNAME_FACT}`")))?;

        let organization_id = match &consumer.environment.organization_id {
            Value::String(id) => id.clone(),
            Value::Number(id) => id.to_string(),
            other => {
                return Err(malformed(format!(
                    "environment.organization_id is not a string or number: {other}"
                )));
            }
        };

        let facts = transform_facts_to_rcs(&consumer.facts);
        if facts.len() != consumer.facts.len() {
            return Err(malformed(
                "fact names collide once `.` is rewritten to `_dot_`".to_string(),
            ));
        }

        Ok(Some(MarketingProductUsage {
            splice_server: self.config.splice_server_uuid.clone(),
            checkin_date: checkin_date.clone(),
            name: consumer.name.clone(),
            service_level: consumer.service_level.clone(),
            hostname: hostname.clone(),
            instance_identifier: consumer.uuid.clone(),
            entitlement_status: consumer.entitlement_status.clone(),
            organization_id,
            organization_name: consumer.owner.display_name.clone(),
            facts,
        }))
    }

    /// Converts raw Katello consumer JSON into usage records.
    ///
    /// Consumers without a checkin time are skipped before any other field
    /// is looked at; they appear in neither `records` nor `rejected`.
    pub fn transform_all_to_rcs(&self, consumers: &[Value]) -> Translation<MarketingProductUsage> {
        let mut batch = Translation::new();

        for item in consumers {
            if item.get("checkin_time").is_none_or(Value::is_null) {
                let name = item.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
                debug!(
                    "system entry for {} has no checkin_time, not loading entry into splice db",
                    name
                );
                continue;
            }

            let outcome = KatelloConsumer::deserialize(item)
                .map_err(|e| MalformedRecord::for_value(RecordKind::Consumer, item, e.to_string()))
                .and_then(|consumer| self.transform_to_rcs(&consumer));

            match outcome {
                Ok(Some(usage)) => batch.records.push(usage),
                Ok(None) => {}
                Err(rejected) => batch.rejected.push(rejected),
            }
        }

        batch
    }
}

/// Rewrites fact names for RCS, which cannot store `.` in keys.
///
/// Every `.` becomes `_dot_`; nothing else changes. When two names
/// rewrite to the same key, the later one in key order wins.
pub fn transform_facts_to_rcs(facts: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut renamed = BTreeMap::new();
    for (name, value) in facts {
        let key = name.replace('.', "_dot_");
        if renamed.insert(key.clone(), value.clone()).is_some() {
            warn!("Fact '{}' collides with another fact as '{}'", name, key);
        }
    }
    renamed
}

/// Renames one entitlement's fields for RCS.
pub fn entitlement_to_rcs(entitlement: &Entitlement) -> RcsEntitlement {
    RcsEntitlement {
        account: entitlement.account_number.clone(),
        contract: entitlement.contract_number.clone(),
        product: entitlement.product_id.clone(),
        quantity: entitlement.quantity,
    }
}

/// Converts raw entitlement JSON for RCS, one record per input, order kept.
pub fn transform_entitlements_to_rcs(entitlements: &[Value]) -> Translation<RcsEntitlement> {
    entitlements
        .iter()
        .map(|item| {
            Entitlement::deserialize(item)
                .map(|ent| entitlement_to_rcs(&ent))
                .map_err(|e| {
                    MalformedRecord::for_value(RecordKind::Entitlement, item, e.to_string())
                })
        })
        .collect()
}
