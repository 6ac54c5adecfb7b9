//! Timestamp parsing and the clock used for "now".

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Source of the current time for window checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date or timestamp as found in the dataset.
///
/// Accepts RFC 3339 (offsets are normalised to UTC), naive
/// `yyyy-MM-ddTHH:MM:SS` / `yyyy-MM-dd HH:MM:SS` with optional fraction,
/// and bare `yyyy-MM-dd` at midnight. Naive forms are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Serde adapter reading timestamps with [`parse_timestamp`].
pub mod serde_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw)
            .ok_or_else(|| D::Error::custom(format!("cannot parse '{raw}' as a date")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_github_timestamps() {
        let expected = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(parse_timestamp("2021-03-04T05:06:07Z"), Some(expected));
        assert_eq!(parse_timestamp("2021-03-04T07:06:07+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2021-03-04T05:06:07"), Some(expected));
        assert_eq!(parse_timestamp("2021-03-04 05:06:07"), Some(expected));
    }

    #[test]
    fn parses_bare_dates_at_midnight() {
        let expected = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2020-01-01"), Some(expected));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_timestamp("01/02/2020"), None);
        assert_eq!(parse_timestamp("2020-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2022, 6, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), instant);
    }
}
