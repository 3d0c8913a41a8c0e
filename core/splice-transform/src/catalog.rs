//! Candlepin catalog JSON to typed products and pools.

use serde::Deserialize;
use serde_json::Value;
use splice_types::{
    parse_timestamp, EngineeringProduct, MalformedRecord, Pool, Product, ProvidedProduct,
    RecordKind, Translation,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct RawAttribute {
    name: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    id: String,
    label: String,
    name: String,
    vendor: String,
}

#[derive(Debug, Deserialize)]
struct RawProductContent {
    content: RawContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: String,
    name: String,
    #[serde(default)]
    created: Option<String>,
    updated: String,
    attributes: Vec<RawAttribute>,
    product_content: Vec<RawProductContent>,
    dependent_product_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProvidedProduct {
    product_id: String,
    product_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPool {
    id: String,
    #[serde(default)]
    account_number: Option<String>,
    created: String,
    updated: String,
    start_date: String,
    end_date: String,
    quantity: u64,
    product_id: String,
    product_name: String,
    product_attributes: Vec<RawAttribute>,
    provided_products: Vec<RawProvidedProduct>,
}

/// Translates a list of Candlepin products.
pub fn translate_products(items: &[Value]) -> Translation<Product> {
    let batch: Translation<Product> = items.iter().map(translate_product).collect();
    debug!(
        "Translated {} products ({} rejected)",
        batch.records.len(),
        batch.rejected.len()
    );
    batch
}

/// Translates a list of Candlepin pools.
pub fn translate_pools(items: &[Value]) -> Translation<Pool> {
    let batch: Translation<Pool> = items.iter().map(translate_pool).collect();
    debug!(
        "Translated {} pools ({} rejected)",
        batch.records.len(),
        batch.rejected.len()
    );
    batch
}

/// Translates one Candlepin product.
///
/// A product without `created` gets its `updated` time instead.
pub fn translate_product(item: &Value) -> Result<Product, MalformedRecord> {
    let malformed = |reason: String| MalformedRecord::for_value(RecordKind::Product, item, reason);

    let raw = RawProduct::deserialize(item).map_err(|e| malformed(e.to_string()))?;

    let updated = parse_timestamp(&raw.updated).map_err(|e| malformed(format!("updated: {e}")))?;
    let created = match &raw.created {
        Some(created) => {
            parse_timestamp(created).map_err(|e| malformed(format!("created: {e}")))?
        }
        None => {
            info!(
                "Product '{}' does not have a 'created' value, defaulting to value for updated",
                raw.id
            );
            updated
        }
    };

    let eng_prods: Vec<EngineeringProduct> = raw
        .product_content
        .into_iter()
        .map(|pc| EngineeringProduct {
            id: pc.content.id,
            label: pc.content.label,
            name: pc.content.name,
            vendor: pc.content.vendor,
        })
        .collect();
    let engineering_ids = eng_prods.iter().map(|ep| ep.id.clone()).collect();

    Ok(Product {
        product_id: raw.id,
        name: raw.name,
        created,
        updated,
        attrs: attribute_map(raw.attributes),
        eng_prods,
        engineering_ids,
        dependent_product_ids: raw.dependent_product_ids,
    })
}

/// Translates one Candlepin pool.
///
/// Pools whose start date falls after their end date are rejected.
pub fn translate_pool(item: &Value) -> Result<Pool, MalformedRecord> {
    let malformed = |reason: String| MalformedRecord::for_value(RecordKind::Pool, item, reason);

    let raw = RawPool::deserialize(item).map_err(|e| malformed(e.to_string()))?;

    let created = parse_timestamp(&raw.created).map_err(|e| malformed(format!("created: {e}")))?;
    let updated = parse_timestamp(&raw.updated).map_err(|e| malformed(format!("updated: {e}")))?;
    let start_date =
        parse_timestamp(&raw.start_date).map_err(|e| malformed(format!("startDate: {e}")))?;
    let end_date =
        parse_timestamp(&raw.end_date).map_err(|e| malformed(format!("endDate: {e}")))?;

    if start_date > end_date {
        return Err(malformed(format!(
            "startDate {start_date} is after endDate {end_date}"
        )));
    }

    let provided_products = raw
        .provided_products
        .into_iter()
        .map(|pp| ProvidedProduct {
            id: pp.product_id,
            name: pp.product_name,
        })
        .collect();

    Ok(Pool {
        uuid: raw.id,
        account: raw.account_number,
        created,
        updated,
        start_date,
        end_date,
        quantity: raw.quantity,
        product_id: raw.product_id,
        product_name: raw.product_name,
        product_attributes: attribute_map(raw.product_attributes),
        provided_products,
    })
}

// Later duplicates overwrite earlier ones.
fn attribute_map(attributes: Vec<RawAttribute>) -> BTreeMap<String, String> {
    attributes
        .into_iter()
        .map(|attr| (attr.name, attr.value))
        .collect()
}
