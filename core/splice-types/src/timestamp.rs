//! Timestamp parsing for upstream records.
//!
//! Candlepin emits ISO-8601 timestamps with a numeric offset and no colon
//! (`2012-09-10T14:36:13.817+0000`), which strict RFC 3339 parsing rejects.
//! Spacewalk checkin times are naive `YYYY-MM-DD HH:MM:SS` strings.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

/// Layout of a Spacewalk checkin time.
pub const CHECKIN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Candlepin's offset layout (`+0000`, optional fractional seconds).
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parses an upstream timestamp into UTC.
///
/// Accepts RFC 3339 and Candlepin's compact-offset form.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, COMPACT_OFFSET_FORMAT))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp(format!("{value:?}: {e}")))
}

/// Parses a Spacewalk checkin time (`YYYY-MM-DD HH:MM:SS`).
pub fn parse_checkin(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, CHECKIN_FORMAT)
        .map_err(|e| Error::InvalidTimestamp(format!("{value:?}: {e}")))
}

/// Formats a checkin time as ISO-8601 without fractional seconds or offset.
#[must_use]
pub fn format_checkin_iso(checkin: &NaiveDateTime) -> String {
    checkin.format("%Y-%m-%dT%H:%M:%S").to_string()
}
