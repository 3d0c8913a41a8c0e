//! Schema translation for the Spacewalk/Candlepin/Katello/RCS bridge.
//!
//! Pure, stateless mapping between wire schemas; nothing here performs I/O
//! except [`read_mapping_file`].
//!
//! - [`translate_products`] / [`translate_pools`]: Candlepin catalog JSON to typed records
//! - [`DataTransforms`]: Katello consumers to RCS usage, Spacewalk systems to consumers
//! - [`transform_facts_to_rcs`] / [`transform_entitlements_to_rcs`]: RCS field rewrites
//! - [`FactTranslator`]: renames Spacewalk system details into subscription-manager facts
//!
//! Batch functions return a [`Translation`](splice_types::Translation): one
//! malformed upstream record is reported and the rest of the batch still
//! translates.

mod catalog;
mod config;
mod consumers;
mod error;
mod facts;
mod mapping;
mod rcs;

pub use catalog::{translate_pool, translate_pools, translate_product, translate_products};
pub use config::TransformConfig;
pub use consumers::{CERTIFICATE_VERSION_FACT, SPACEWALK_HOSTNAME_FACT, SUPPORTED_CERTIFICATE_VERSION};
pub use error::{TransformError, TransformResult};
pub use facts::{FactTranslator, MappedFactTranslator};
pub use mapping::{parse_mapping, read_mapping_file};
pub use rcs::{
    entitlement_to_rcs, transform_entitlements_to_rcs, transform_facts_to_rcs, DataTransforms,
    HOSTNAME_FACT,
};
