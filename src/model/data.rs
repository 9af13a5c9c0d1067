//! Order date parsing. Clients send RFC 3339 timestamps or bare dates as strings, or epoch
//! milliseconds as a JSON number. Digit-only strings are not milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawData {
    Millis(i64),
    Text(String),
}

/// Earliest instant a PostgreSQL `timestamptz` holds (4714-11-24 BC, UTC). The latest one
/// is past chrono's own maximum.
const MIN_STORABLE_MILLIS: i64 = -210_866_803_200_000;

/// Parse an order date from its textual form.
pub fn parse_data(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    let parsed = if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        dt.with_timezone(&Utc)
    } else if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        Utc.from_utc_datetime(&naive)
    } else if let Some(naive) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        Utc.from_utc_datetime(&naive)
    } else {
        return Err(format!("data inválida: '{}'", s));
    };
    storable(parsed)
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, String> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| format!("data fora do intervalo: {}", ms))
        .and_then(storable)
}

fn storable(dt: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
    if dt.timestamp_millis() < MIN_STORABLE_MILLIS {
        return Err(format!("data fora do intervalo: {}", dt.to_rfc3339()));
    }
    Ok(dt)
}

pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawData> = Option::deserialize(deserializer)?;
    raw.map(|r| match r {
        RawData::Millis(ms) => from_millis(ms),
        RawData::Text(s) => parse_data(&s),
    })
    .transpose()
    .map_err(serde::de::Error::custom)
}
