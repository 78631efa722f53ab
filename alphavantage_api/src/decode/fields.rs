//! Field-level deserializers for the quirks of Alpha Vantage payloads.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` as midnight.
pub(crate) fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .or_else(|_| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .map_err(|_| format!("invalid timestamp `{}`", s))
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `"1.2345%"` -> `1.2345`.
pub(crate) fn percent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .trim()
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("invalid percentage `{}`", raw)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Match scores are sent as strings (`"0.8000"`); plain numbers are accepted too.
pub(crate) fn score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid match score `{}`", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intraday_and_daily_timestamps() {
        let intraday = parse_timestamp("2024-01-05 19:55:00").unwrap();
        assert_eq!(intraday.to_string(), "2024-01-05 19:55:00");

        let daily = parse_timestamp("2024-01-05").unwrap();
        assert_eq!(daily.to_string(), "2024-01-05 00:00:00");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
        assert!(parse_timestamp("2024-13-40").is_err());
    }
}
