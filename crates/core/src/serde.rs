//! Serde helper functions for tolerant item deserialization.
//!
//! Item payloads come from whatever backend the caller talks to, so a single
//! odd record must not fail a whole list. These helpers turn empty, unknown or
//! unparseable values into `None` instead of returning an error.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional enumerated value from its string form.
///
/// Unknown and empty strings become None, so an item carrying a category or
/// status outside the closed set simply never matches a filter on it.
pub fn deserialize_lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.parse().ok()))
}

/// Deserialize a collection, treating `null` as the empty default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCount {
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Deserialize an optional non-negative count.
///
/// Integers, whole non-negative floats and numeric strings are accepted.
/// Fractions, negatives and any other shape become None.
pub fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<LenientCount> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        LenientCount::Unsigned(n) => Some(n),
        LenientCount::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Some(f as u64)
        }
        LenientCount::Text(s) => s.trim().parse().ok(),
        LenientCount::Float(_) | LenientCount::Other(_) => None,
    }))
}

/// Deserialize an optional ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 with any offset, a naive `YYYY-MM-DDTHH:MM:SS` (read as
/// UTC) and a bare `YYYY-MM-DD` (midnight UTC). Anything else becomes None.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_timestamp))
}

/// Parses a timestamp in one of the formats accepted by
/// [`deserialize_optional_datetime`].
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
