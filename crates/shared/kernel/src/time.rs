//! UTC time helpers and canonical renderings.
//!
//! Everything is stored and exchanged in UTC; display timezones are a client
//! concern.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use lbites_domain::constants::date_format;

/// Current UTC instant.
#[must_use]
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// RFC 3339 with millisecond precision and a `Z` suffix, the wire form.
#[must_use]
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `YYYY-MM-DD`.
#[must_use]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(date_format::DATE).to_string()
}

/// `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(date_format::DATETIME).to_string()
}

/// Long form for receipts and notifications, e.g. `March 05, 2026 at 02:15 PM`.
#[must_use]
pub fn format_human(dt: &DateTime<Utc>) -> String {
    dt.format(date_format::HUMAN_READABLE).to_string()
}

/// Parses the `YYYY-MM-DD HH:MM:SS` form back into a UTC instant.
///
/// # Errors
/// Returns a [`chrono::ParseError`] if the input does not match the format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, date_format::DATETIME).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DateTime<Utc> {
        DateTime::from_timestamp(1_772_000_000, 0).expect("valid timestamp")
    }

    #[test]
    fn canonical_renderings() {
        let dt = fixture();
        assert_eq!(format_date(&dt), "2026-02-25");
        assert_eq!(format_datetime(&dt), "2026-02-25 06:13:20");
        assert_eq!(to_rfc3339(&dt), "2026-02-25T06:13:20.000Z");
        assert_eq!(format_human(&dt), "February 25, 2026 at 06:13 AM");
    }

    #[test]
    fn datetime_round_trip() {
        let dt = fixture();
        let parsed = parse_datetime(&format_datetime(&dt)).expect("parse");
        assert_eq!(parsed, dt);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_datetime("yesterday-ish").is_err());
    }
}
