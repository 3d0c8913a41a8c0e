use chrono::{Datelike, NaiveDate, Timelike};
use splice_types::{format_checkin_iso, parse_checkin, parse_timestamp, Error};

// ── parse_timestamp ──────────────────────────────────────────────

#[test]
fn parses_rfc3339_utc() {
    let ts = parse_timestamp("2012-09-10T14:36:13Z").unwrap();
    assert_eq!(ts.year(), 2012);
    assert_eq!(ts.hour(), 14);
    assert_eq!(ts.second(), 13);
}

#[test]
fn parses_candlepin_compact_offset() {
    let ts = parse_timestamp("2012-09-10T14:36:13.817+0000").unwrap();
    assert_eq!(ts.month(), 9);
    assert_eq!(ts.day(), 10);
    assert_eq!(ts.timestamp_subsec_millis(), 817);
}

#[test]
fn compact_offset_is_normalized_to_utc() {
    let ts = parse_timestamp("2012-09-10T14:36:13-0500").unwrap();
    assert_eq!(ts.hour(), 19);
}

#[test]
fn rfc3339_and_compact_forms_agree() {
    let a = parse_timestamp("2013-01-01T00:00:00.000+0000").unwrap();
    let b = parse_timestamp("2013-01-01T00:00:00+00:00").unwrap();
    assert_eq!(a, b);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(parse_timestamp("  2012-09-10T14:36:13Z\n").is_ok());
}

#[test]
fn rejects_garbage() {
    let err = parse_timestamp("yesterday").unwrap_err();
    assert!(matches!(err, Error::InvalidTimestamp(_)));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn rejects_date_without_time() {
    assert!(parse_timestamp("2012-09-10").is_err());
}

// ── checkin times ────────────────────────────────────────────────

#[test]
fn parses_spacewalk_checkin() {
    let dt = parse_checkin("2009-01-01 05:01:01").unwrap();
    assert_eq!(
        dt,
        NaiveDate::from_ymd_opt(2009, 1, 1)
            .unwrap()
            .and_hms_opt(5, 1, 1)
            .unwrap()
    );
}

#[test]
fn checkin_rejects_iso_separator() {
    assert!(parse_checkin("2009-01-01T05:01:01").is_err());
}

#[test]
fn checkin_rejects_empty() {
    assert!(matches!(parse_checkin(""), Err(Error::InvalidTimestamp(_))));
}

#[test]
fn checkin_formats_as_iso() {
    let dt = parse_checkin("2009-01-01 05:01:01").unwrap();
    assert_eq!(format_checkin_iso(&dt), "2009-01-01T05:01:01");
}
