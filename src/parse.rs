//! Defensive parsing utilities
//!
//! Snapshot files exported from the upstream system are not strictly typed:
//! amounts may arrive as numbers or strings, timestamps as RFC 3339 strings,
//! epoch seconds, or `{seconds, nanoseconds}` objects. These helpers coerce
//! every such field to a usable value instead of failing the whole snapshot.
//!
//! Coercion policy:
//! - amounts: non-negative finite number; anything unparseable becomes 0
//! - timestamps: `None` when the value cannot be interpreted ("unknown day")

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a monetary/quantity amount from a string, falling back to zero.
///
/// Accepts plain decimals with an optional currency symbol and thousands
/// separators ("1,234.50", "₱65.90", "$12").
pub fn parse_amount(s: &str) -> f64 {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    coerce_amount(cleaned.parse::<f64>().unwrap_or(0.0))
}

/// Clamp an amount to a non-negative finite number.
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Round a currency value to 2 decimal places (half away from zero).
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a timestamp string in the formats the upstream export produces.
///
/// Tries RFC 3339 first, then a naive `YYYY-MM-DD HH:MM:SS` (interpreted in
/// local time), then a bare date (midnight local time).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return local_to_utc(naive);
    }

    if let Some(naive) = parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return local_to_utc(naive);
    }

    None
}

/// Interpret a JSON value as a timestamp.
///
/// Handles the three shapes the upstream export is known to emit:
/// RFC 3339 strings, epoch seconds, and `{seconds, nanoseconds}` objects.
pub fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        Value::Object(map) => map
            .get("seconds")
            .and_then(Value::as_i64)
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        _ => None,
    }
}

/// Interpret a JSON value as an amount, coerced to a non-negative number.
pub fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => coerce_amount(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_amount(s),
        _ => 0.0,
    }
}

/// Serde helper: deserialize an amount field leniently.
pub fn de_flexible_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, amount_from_value))
}

/// Serde helper: deserialize a timestamp field leniently.
pub fn de_flexible_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(timestamp_from_value))
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
