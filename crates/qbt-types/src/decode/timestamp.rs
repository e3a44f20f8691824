use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An absolute point in time, transported as signed Unix epoch seconds.
///
/// Decoding accepts a JSON integer or a string holding only a decimal integer.
/// Anything else is rejected instead of collapsing to the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// 1970-01-01T00:00:00Z
    pub const EPOCH: Self = Self(DateTime::UNIX_EPOCH);

    /// Builds a timestamp from epoch seconds, `None` when out of range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Epoch seconds.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The underlying UTC time.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl TimestampVisitor {
    fn from_secs<E: de::Error>(secs: i64) -> Result<Timestamp, E> {
        Timestamp::from_unix(secs)
            .ok_or_else(|| E::custom(format!("timestamp {secs} is out of range")))
    }
}

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unix epoch seconds as an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::from_secs(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("timestamp {v} is out of range")))?;
        Self::from_secs(secs)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let secs = v
            .parse::<i64>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))?;
        Self::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;

    #[test]
    fn zero_is_the_epoch() {
        let ts: Timestamp = serde_json::from_str("0").unwrap();
        assert_eq!(ts, Timestamp::EPOCH);
        assert_eq!(ts.unix(), 0);
    }

    #[test]
    fn integer_and_integer_string_agree() {
        let a: Timestamp = serde_json::from_str("1700000000").unwrap();
        let b: Timestamp = serde_json::from_str("\"1700000000\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_datetime().to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn negative_values_are_kept() {
        let ts: Timestamp = serde_json::from_str("-1").unwrap();
        assert_eq!(ts.unix(), -1);
    }

    #[test]
    fn non_numeric_payloads_are_rejected() {
        for raw in ["\"abc\"", "\"\"", "1.5", "true", "null", "\"12a\""] {
            assert!(
                serde_json::from_str::<Timestamp>(raw).is_err(),
                "{raw} should not decode"
            );
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(serde_json::from_str::<Timestamp>("9223372036854775807").is_err());
        assert!(serde_json::from_str::<Timestamp>("18446744073709551615").is_err());
    }

    #[test]
    fn serializes_back_to_seconds() {
        let ts = Timestamp::from_unix(42).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
    }
}
