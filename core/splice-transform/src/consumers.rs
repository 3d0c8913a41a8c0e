//! Spacewalk systems to intermediate consumers.

use serde::Deserialize;
use serde_json::Value;
use splice_types::{Consumer, MalformedRecord, RecordKind, SystemDetails, Translation};
use tracing::info;

use crate::facts::FactTranslator;
use crate::rcs::DataTransforms;

/// Fact naming the entitlement certificate version a consumer can handle.
pub const CERTIFICATE_VERSION_FACT: &str = "system.certificate_version";

/// Version 3.1 lets large certificates bind to the consumer.
pub const SUPPORTED_CERTIFICATE_VERSION: &str = "3.1";

/// Fact recording which Spacewalk server a consumer came from.
pub const SPACEWALK_HOSTNAME_FACT: &str = "spacewalk-server-hostname";

impl DataTransforms {
    /// Converts Spacewalk systems into intermediate consumers.
    ///
    /// The result still needs reshaping before Katello accepts it.
    pub fn transform_to_consumers(
        &self,
        systems: &[SystemDetails],
        facts: &dyn FactTranslator,
    ) -> Vec<Consumer> {
        info!("Translating system details to katello consumers");
        systems
            .iter()
            .map(|details| self.transform_to_consumer(details, facts))
            .collect()
    }

    /// Converts one Spacewalk system into an intermediate consumer.
    pub fn transform_to_consumer(
        &self,
        details: &SystemDetails,
        facts: &dyn FactTranslator,
    ) -> Consumer {
        let mut facts_data = facts.translate(details);
        facts_data.insert(
            CERTIFICATE_VERSION_FACT.to_string(),
            SUPPORTED_CERTIFICATE_VERSION.to_string(),
        );
        facts_data.insert(
            SPACEWALK_HOSTNAME_FACT.to_string(),
            self.config().spacewalk_host.clone(),
        );

        Consumer {
            id: details.server_id.clone(),
            facts: facts_data,
            owner: details.org_id.clone(),
            // Katello rejects leading/trailing whitespace in names
            name: details.name.trim().to_string(),
            last_checkin: details.last_checkin_time.clone(),
            installed_products: details.installed_products.clone(),
        }
    }

    /// Converts raw Spacewalk system JSON, rejecting items that do not parse.
    pub fn transform_systems(
        &self,
        systems: &[Value],
        facts: &dyn FactTranslator,
    ) -> Translation<Consumer> {
        info!("Translating {} system records", systems.len());
        systems
            .iter()
            .map(|item| {
                SystemDetails::deserialize(item)
                    .map(|details| self.transform_to_consumer(&details, facts))
                    .map_err(|e| {
                        MalformedRecord::for_value(RecordKind::SystemDetails, item, e.to_string())
                    })
            })
            .collect()
    }
}
