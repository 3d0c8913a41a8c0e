use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use splice_transform::{translate_pool, translate_pools, translate_product, translate_products};
use splice_types::{parse_timestamp, RecordKind};

fn product_json() -> Value {
    json!({
        "id": "RH0103708",
        "name": "Red Hat Enterprise Linux Server",
        "created": "2012-09-10T14:36:13.817+0000",
        "updated": "2012-09-11T08:00:00.000+0000",
        "attributes": [
            {"name": "type", "value": "MKT"},
            {"name": "arch", "value": "x86_64"},
            {"name": "name", "value": "RHEL Server"}
        ],
        "productContent": [
            {"content": {"id": "1", "label": "rhel-server", "name": "RHEL Server RPMs", "vendor": "Red Hat"}},
            {"content": {"id": "2", "label": "rhel-server-debug", "name": "RHEL Debug", "vendor": "Red Hat"}}
        ],
        "dependentProductIds": ["69"],
        "href": "/products/RH0103708"
    })
}

fn pool_json() -> Value {
    json!({
        "id": "8a8d01f53a2b4be6013a2b4d2c3f0012",
        "accountNumber": "1508113",
        "created": "2012-10-01T12:00:00.000+0000",
        "updated": "2012-10-02T12:00:00.000+0000",
        "startDate": "2012-10-01T00:00:00.000+0000",
        "endDate": "2013-10-01T00:00:00.000+0000",
        "quantity": 100,
        "productId": "RH0103708",
        "productName": "Red Hat Enterprise Linux Server",
        "productAttributes": [
            {"name": "sockets", "value": "2"},
            {"name": "virt_limit", "value": "1"}
        ],
        "providedProducts": [
            {"productId": "69", "productName": "Red Hat Enterprise Linux Server", "id": "x"},
            {"productId": "180", "productName": "Red Hat Beta", "id": "y"}
        ]
    })
}

// ── Products ─────────────────────────────────────────────────────

#[test]
fn product_fields_are_mapped() {
    let product = translate_product(&product_json()).unwrap();
    assert_eq!(product.product_id, "RH0103708");
    assert_eq!(product.name, "Red Hat Enterprise Linux Server");
    assert_eq!(product.created, parse_timestamp("2012-09-10T14:36:13.817Z").unwrap());
    assert_eq!(product.updated, parse_timestamp("2012-09-11T08:00:00Z").unwrap());
    assert_eq!(product.attrs["type"], "MKT");
    assert_eq!(product.attrs["arch"], "x86_64");
    assert_eq!(product.dependent_product_ids, vec!["69".to_string()]);
}

#[test]
fn product_engineering_ids_follow_content_order() {
    let product = translate_product(&product_json()).unwrap();
    assert_eq!(product.eng_prods.len(), 2);
    assert_eq!(product.eng_prods[0].label, "rhel-server");
    assert_eq!(product.eng_prods[1].vendor, "Red Hat");
    assert_eq!(product.engineering_ids, vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn product_without_created_uses_updated() {
    let mut raw = product_json();
    raw.as_object_mut().unwrap().remove("created");
    let product = translate_product(&raw).unwrap();
    assert_eq!(product.created, product.updated);
}

#[test]
fn product_with_null_created_uses_updated() {
    let mut raw = product_json();
    raw["created"] = Value::Null;
    let product = translate_product(&raw).unwrap();
    assert_eq!(product.created, product.updated);
}

#[test]
fn product_missing_updated_is_malformed() {
    let mut raw = product_json();
    raw.as_object_mut().unwrap().remove("updated");
    let err = translate_product(&raw).unwrap_err();
    assert_eq!(err.kind, RecordKind::Product);
    assert_eq!(err.id.as_deref(), Some("RH0103708"));
    assert!(err.reason.contains("updated"));
}

#[test]
fn product_bad_timestamp_is_malformed() {
    let mut raw = product_json();
    raw["created"] = json!("last tuesday");
    let err = translate_product(&raw).unwrap_err();
    assert!(err.reason.starts_with("created"));
}

#[test]
fn product_batch_continues_past_bad_record() {
    let mut bad = product_json();
    bad["id"] = json!("broken");
    bad.as_object_mut().unwrap().remove("productContent");

    let batch = translate_products(&[product_json(), bad, json!("not an object")]);
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.rejected.len(), 2);
    assert_eq!(batch.rejected[0].id.as_deref(), Some("broken"));
    assert_eq!(batch.rejected[1].id, None);
}

#[test]
fn empty_product_list() {
    let batch = translate_products(&[]);
    assert!(batch.records.is_empty());
    assert!(batch.is_clean());
}

// ── Pools ────────────────────────────────────────────────────────

#[test]
fn pool_fields_are_mapped() {
    let pool = translate_pool(&pool_json()).unwrap();
    assert_eq!(pool.uuid, "8a8d01f53a2b4be6013a2b4d2c3f0012");
    assert_eq!(pool.account.as_deref(), Some("1508113"));
    assert_eq!(pool.quantity, 100);
    assert_eq!(pool.product_id, "RH0103708");
    assert_eq!(pool.product_attributes["sockets"], "2");
    assert_eq!(pool.start_date, parse_timestamp("2012-10-01T00:00:00Z").unwrap());
    assert_eq!(pool.end_date, parse_timestamp("2013-10-01T00:00:00Z").unwrap());
}

#[test]
fn pool_provided_products_are_simplified() {
    let pool = translate_pool(&pool_json()).unwrap();
    let ids: Vec<&str> = pool.provided_products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["69", "180"]);
    assert_eq!(pool.provided_products[1].name, "Red Hat Beta");
}

#[test]
fn pool_duplicate_attributes_keep_last() {
    let mut raw = pool_json();
    raw["productAttributes"] = json!([
        {"name": "sockets", "value": "2"},
        {"name": "sockets", "value": "4"}
    ]);
    let pool = translate_pool(&raw).unwrap();
    assert_eq!(pool.product_attributes.len(), 1);
    assert_eq!(pool.product_attributes["sockets"], "4");
}

#[test]
fn pool_without_account_is_accepted() {
    let mut raw = pool_json();
    raw["accountNumber"] = Value::Null;
    let pool = translate_pool(&raw).unwrap();
    assert!(pool.account.is_none());
}

#[test]
fn pool_with_inverted_dates_is_rejected() {
    let mut raw = pool_json();
    raw["startDate"] = json!("2014-01-01T00:00:00.000+0000");
    let err = translate_pool(&raw).unwrap_err();
    assert_eq!(err.kind, RecordKind::Pool);
    assert!(err.reason.contains("after endDate"));
}

#[test]
fn pool_negative_quantity_is_rejected() {
    let mut raw = pool_json();
    raw["quantity"] = json!(-1);
    let err = translate_pool(&raw).unwrap_err();
    assert_eq!(err.id.as_deref(), Some("8a8d01f53a2b4be6013a2b4d2c3f0012"));
}

#[test]
fn pool_batch_reports_each_bad_record() {
    let mut bad = pool_json();
    bad["id"] = json!("p-bad");
    bad.as_object_mut().unwrap().remove("endDate");

    let batch = translate_pools(&[bad, pool_json()]);
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].id.as_deref(), Some("p-bad"));
    assert!(batch.rejected[0].reason.contains("endDate"));
}
