//! Record types for the Spacewalk/Candlepin/Katello/RCS bridge.
//!
//! This crate defines the typed records every other crate exchanges:
//! - Catalog records pulled from Candlepin ([`Product`], [`Pool`], [`Rules`], [`Owner`])
//! - Consumer shapes on both sides of the bridge ([`SystemDetails`], [`Consumer`],
//!   [`KatelloConsumer`], [`Entitlement`])
//! - Flattened usage records for the reporting side ([`MarketingProductUsage`],
//!   [`RcsEntitlement`])
//! - Batch results that keep malformed upstream records instead of aborting
//!   ([`Translation`], [`MalformedRecord`])
//!
//! Records are plain values: once built they are never mutated, each
//! translation step produces new ones.

mod catalog;
mod consumer;
mod malformed;
mod rcs;
mod timestamp;

pub use catalog::{EngineeringProduct, Owner, Pool, Product, ProvidedProduct, Rules, RULES_VERSION};
pub use consumer::{
    Consumer, Entitlement, InstalledProduct, KatelloConsumer, KatelloEnvironment, KatelloOwner,
    SystemDetails,
};
pub use malformed::{record_id, MalformedRecord, RecordKind, Translation};
pub use rcs::{MarketingProductUsage, RcsEntitlement};
pub use timestamp::{format_checkin_iso, parse_checkin, parse_timestamp, CHECKIN_FORMAT};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing record fields.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
