//! Timestamp-derived identifiers and timestamp formatting.
//!
//! Record ids are the current UNIX time in milliseconds rendered in decimal,
//! and `created_at` fields are RFC 3339 UTC strings with millisecond
//! precision. Two records created within the same millisecond receive the
//! same id; the data layer accepts that collision window.

use chrono::{DateTime, SecondsFormat, Utc};

/// Derives a record id from the given instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scribe_core::ids::timestamp_id;
///
/// let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// assert_eq!(timestamp_id(at), "1714564800000");
/// ```
pub fn timestamp_id(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Formats an instant as an RFC 3339 UTC timestamp with millisecond
/// precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a persisted timestamp back to UNIX milliseconds.
///
/// Persisted timestamps are trusted input, so an unparseable value does not
/// fail the caller; it sorts as the epoch.
pub fn parse_timestamp_millis(value: &str) -> i64 {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_id_is_decimal_millis() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(timestamp_id(at), "1714564800000");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_parse_round_trip() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let formatted = format_timestamp(at);
        assert_eq!(parse_timestamp_millis(&formatted), at.timestamp_millis());
    }

    #[test]
    fn test_parse_garbage_sorts_as_epoch() {
        assert_eq!(parse_timestamp_millis("not a date"), 0);
        assert_eq!(parse_timestamp_millis(""), 0);
    }
}
