//! Lenient timestamp parsing.
//! The backend mixes full timestamps with bare dates.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

/// Deserializes an optional timestamp, ignoring unparsable values.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse))
}

/// Formats a timestamp for display, e.g. `5 March 2024`.
/// Missing timestamps display as an empty string.
pub fn display(date: Option<DateTime<Utc>>) -> String {
    date.map(|date| date.format("%-d %B %Y").to_string()).unwrap_or_default()
}
