//! Consumer registration, update, checkin and entitlement operations.

use chrono::NaiveDateTime;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use splice_types::{format_checkin_iso, parse_checkin, InstalledProduct};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::client::{CandlepinClient, ResponseFormat};
use crate::error::{CandlepinError, CandlepinResult, CreateStep};
use crate::oauth::percent_encode;

/// Consumer type registered for every Spacewalk system.
pub const SYSTEM_CONSUMER_TYPE: &str = "system";

/// A consumer to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsumer {
    pub name: String,
    pub facts: BTreeMap<String, String>,
    pub installed_products: Vec<InstalledProduct>,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub last_checkin: String,
    /// Requested uuid; Candlepin generates one when unset.
    pub uuid: Option<String>,
    /// Owner key to register under.
    pub owner: Option<String>,
}

/// Changes to an existing consumer. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumerUpdate {
    pub uuid: String,
    pub facts: Option<BTreeMap<String, String>>,
    pub installed_products: Option<Vec<InstalledProduct>>,
    pub guest_ids: Option<Vec<String>>,
    pub release: Option<String>,
    pub service_level: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub last_checkin: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    facts: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    installed_products: Option<&'a [InstalledProduct]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uuid: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    installed_products: Option<&'a [InstalledProduct]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facts: Option<&'a BTreeMap<String, String>>,
    #[serde(rename = "releaseVer", skip_serializing_if = "Option::is_none")]
    release: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_level: Option<&'a str>,
}

fn consumer_path(uuid: &str) -> String {
    format!("/consumers/{}", percent_encode(uuid))
}

impl CandlepinClient {
    /// Records a checkin for a consumer, at `checkin_date` if given.
    pub async fn checkin(
        &self,
        uuid: &str,
        checkin_date: Option<&NaiveDateTime>,
    ) -> CandlepinResult<()> {
        let mut path = format!("{}/checkin", consumer_path(uuid));
        if let Some(date) = checkin_date {
            path = format!("{path}?checkin_date={}", percent_encode(&format_checkin_iso(date)));
        }
        self.request_unit(&path, Method::PUT, None).await
    }

    /// Registers a consumer, binds it, and records its last checkin.
    ///
    /// Returns the uuid Candlepin assigned. If the bind or checkin step
    /// fails, the consumer already exists and the error is
    /// [`CandlepinError::PartialCreate`] naming it.
    pub async fn create_consumer(&self, consumer: &NewConsumer) -> CandlepinResult<String> {
        let last_checkin = parse_checkin(&consumer.last_checkin)?;

        let body = serde_json::to_value(RegistrationBody {
            kind: SYSTEM_CONSUMER_TYPE,
            name: &consumer.name,
            facts: &consumer.facts,
            installed_products: Some(consumer.installed_products.as_slice())
                .filter(|products| !products.is_empty()),
            uuid: consumer.uuid.as_deref(),
        })?;

        let mut path = "/consumers".to_string();
        if let Some(owner) = &consumer.owner {
            path = format!("{path}?owner={}", percent_encode(owner));
        }

        let created = self
            .request(&path, Method::POST, Some(&body), ResponseFormat::Json)
            .await?
            .into_json();
        let uuid = created
            .get("uuid")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                CandlepinError::UnexpectedResponse(format!(
                    "consumer registration returned no uuid: {created}"
                ))
            })?
            .to_string();
        info!("Registered consumer {} ({})", consumer.name, uuid);

        let partial = |step: CreateStep| {
            let uuid = uuid.clone();
            move |source: CandlepinError| {
                warn!("Consumer {} created but {} failed: {}", uuid, step, source);
                CandlepinError::PartialCreate {
                    uuid,
                    step,
                    source: Box::new(source),
                }
            }
        };

        let bind_path = format!("{}/entitlements", consumer_path(&uuid));
        self.request_unit(&bind_path, Method::POST, None)
            .await
            .map_err(partial(CreateStep::Bind))?;

        self.checkin(&uuid, Some(&last_checkin))
            .await
            .map_err(partial(CreateStep::Checkin))?;

        Ok(uuid)
    }

    /// Sends the supplied fields of a consumer, then records its checkin.
    pub async fn update_consumer(&self, update: &ConsumerUpdate) -> CandlepinResult<()> {
        let last_checkin = parse_checkin(&update.last_checkin)?;

        let body = serde_json::to_value(UpdateBody {
            installed_products: update.installed_products.as_deref(),
            guest_ids: update.guest_ids.as_deref(),
            facts: update.facts.as_ref(),
            release: update.release.as_deref(),
            service_level: update.service_level.as_deref(),
        })?;

        self.request_unit(&consumer_path(&update.uuid), Method::PUT, Some(&body))
            .await?;
        debug!("Updated consumer {}", update.uuid);

        self.checkin(&update.uuid, Some(&last_checkin)).await
    }

    /// Lists consumers, optionally restricted to one owner.
    pub async fn get_consumers(&self, owner: Option<&str>) -> CandlepinResult<Vec<Value>> {
        let mut path = "/consumers".to_string();
        if let Some(owner) = owner {
            path = format!("{path}?owner={}", percent_encode(owner));
        }
        self.request_list(&path).await
    }

    /// Fetches one consumer.
    pub async fn get_consumer(&self, uuid: &str) -> CandlepinResult<Value> {
        self.request_json(&consumer_path(uuid), Method::GET, None)
            .await
    }

    /// Deletes consumers one at a time, stopping at the first failure.
    pub async fn unregister_consumers(&self, consumer_ids: &[String]) -> CandlepinResult<()> {
        for consumer_id in consumer_ids {
            self.request_unit(&consumer_path(consumer_id), Method::DELETE, None)
                .await?;
            info!("Unregistered consumer {}", consumer_id);
        }
        Ok(())
    }

    /// Removes the deletion record left behind by an unregistered consumer.
    pub async fn remove_deletion_record(&self, consumer_id: &str) -> CandlepinResult<()> {
        let path = format!("{}/deletionrecord", consumer_path(consumer_id));
        self.request_unit(&path, Method::DELETE, None).await
    }

    /// Lists a consumer's entitlements.
    pub async fn get_entitlements(&self, uuid: &str) -> CandlepinResult<Vec<Value>> {
        let path = format!("{}/entitlements", consumer_path(uuid));
        self.request_list(&path).await
    }
}
