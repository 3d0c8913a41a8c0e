use pretty_assertions::assert_eq;
use serde_json::json;
use splice_tool::{
    consumers_from_file, entitlements_for_rcs, rcs_usage_from_file, read_records,
    report_rejected, to_pretty_json, ToolConfig, ToolError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn config() -> ToolConfig {
    ToolConfig::from_toml_str(
        "[spacewalk]\nhost = \"spacewalk.example.com\"\n[splice]\nserver_uuid = \"splice-1\"\n",
    )
    .unwrap()
}

fn write_json(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file
}

fn katello(uuid: &str, checkin: Option<&str>) -> serde_json::Value {
    json!({
        "uuid": uuid,
        "name": format!("{uuid}.example.com"),
        "checkin_time": checkin,
        "serviceLevel": "STANDARD",
        "entitlement_status": "valid",
        "facts": { "network.hostname": format!("{uuid}.example.com") },
        "environment": { "organization_id": "7" },
        "owner": { "displayName": "ACME" }
    })
}

// ── read_records ────────────────────────────────────────────────

#[test]
fn array_file_yields_each_record() {
    let file = write_json(&json!([{ "id": 1 }, { "id": 2 }]));
    assert_eq!(read_records(file.path()).unwrap().len(), 2);
}

#[test]
fn single_object_is_one_record() {
    let file = write_json(&json!({ "id": 1 }));
    assert_eq!(read_records(file.path()).unwrap(), vec![json!({ "id": 1 })]);
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_records(&dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, ToolError::Input { .. }));
}

#[test]
fn invalid_json_input_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[{").unwrap();
    let err = read_records(file.path()).unwrap_err();
    assert!(matches!(err, ToolError::InputFormat { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

// ── Translation commands ────────────────────────────────────────

#[test]
fn rcs_usage_skips_unchecked_and_rejects_malformed() {
    let mut broken = katello("c3", Some("2013-02-01 10:00:00"));
    broken["facts"] = json!({});
    let file = write_json(&json!([
        katello("c1", Some("2013-02-01 10:00:00")),
        katello("c2", None),
        broken,
    ]));

    let batch = rcs_usage_from_file(&config(), file.path()).unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].instance_identifier, "c1");
    assert_eq!(batch.records[0].splice_server, "splice-1");
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].id.as_deref(), Some("c3"));
    assert_eq!(report_rejected(&batch.rejected), 1);
}

#[test]
fn systems_become_consumers_with_fixed_facts() {
    let file = write_json(&json!([{
        "server_id": "1000010000",
        "org_id": "1",
        "name": "  web01  ",
        "last_checkin_time": "2013-02-27 14:05:12",
        "memory": "2048"
    }]));

    let batch = consumers_from_file(&config(), file.path()).unwrap();
    assert!(batch.is_clean());
    let consumer = &batch.records[0];
    assert_eq!(consumer.id, "1000010000");
    assert_eq!(consumer.name, "web01");
    assert_eq!(
        consumer.facts.get("spacewalk-server-hostname").map(String::as_str),
        Some("spacewalk.example.com")
    );
    assert!(!consumer.facts.contains_key("memory"));
}

#[test]
fn entitlements_are_renamed_for_rcs() {
    let batch = entitlements_for_rcs(&[
        json!({ "accountNumber": "1", "contractNumber": "2", "productId": "RH1", "quantity": 4 }),
        json!({ "productId": "RH2" }),
    ]);
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].product, "RH1");
    assert_eq!(batch.rejected.len(), 1);
}

#[test]
fn pretty_json_is_indented() {
    let out = to_pretty_json(&vec!["a", "b"]).unwrap();
    assert_eq!(out, "[\n  \"a\",\n  \"b\"\n]");
}
