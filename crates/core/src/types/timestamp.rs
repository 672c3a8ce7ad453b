//! Vendor timestamp parsing.
//!
//! The store API reports instants as full date-times
//! (`2010-08-15T00:00:00.000Z`) and calendar dates as xsd dates with an
//! optional zone (`2010-08-15Z`, `2010-08-15+02:00`, `2010-08-15`). Both are
//! normalized to UTC; dates become midnight in their zone.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Error returned when a vendor timestamp cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp: {0:?}")]
pub struct TimestampError(String);

/// Parse a vendor timestamp into a UTC instant.
///
/// # Errors
///
/// Returns an error if the input is neither an RFC 3339 date-time nor an
/// xsd date.
pub fn parse(s: &str) -> Result<DateTime<Utc>, TimestampError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.to_utc());
    }

    let invalid = || TimestampError(s.to_owned());
    let date = s.get(..10).ok_or_else(invalid)?;
    let zone = match s.get(10..).ok_or_else(invalid)? {
        "" => "Z",
        zone => zone,
    };

    DateTime::parse_from_rfc3339(&format!("{date}T00:00:00{zone}"))
        .map(|dt| dt.to_utc())
        .map_err(|_| invalid())
}

/// Format a UTC instant the way the vendor writes it.
#[must_use]
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter for optional vendor timestamps.
///
/// Missing and empty elements both read as `None`.
pub mod option {
    use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serialize an optional timestamp.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty value is not a valid timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_datetime() {
        let dt = parse("2010-08-15T10:30:00.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2010, 8, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        let dt = parse("2010-08-15T10:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2010, 8, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_forms() {
        let midnight = Utc.with_ymd_and_hms(2010, 8, 15, 0, 0, 0).unwrap();
        assert_eq!(parse("2010-08-15Z").unwrap(), midnight);
        assert_eq!(parse("2010-08-15").unwrap(), midnight);
        assert_eq!(
            parse("2010-08-15-05:00").unwrap(),
            Utc.with_ymd_and_hms(2010, 8, 15, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("").is_err());
        assert!(parse("yesterday").is_err());
        assert!(parse("2010-13-45Z").is_err());
        assert!(parse("2010-08-15Q").is_err());
    }

    #[test]
    fn test_format_round_trips() {
        let dt = Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&dt), "2021-01-02T03:04:05.000Z");
        assert_eq!(parse(&format(&dt)).unwrap(), dt);
    }
}
