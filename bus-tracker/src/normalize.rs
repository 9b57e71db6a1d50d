//! Converts loosely-typed wire records into canonical bus states.
//!
//! Records arrive from the read endpoint as arbitrary JSON. Missing or
//! ill-typed fields fall back to defaults, including an unreadable
//! `last_update`, which becomes the current time. Only a value that is not
//! an object at all becomes `None`. Nothing here panics, whatever the input.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{BusState, BusStatus, DEFAULT_CAPACITY, format_display_timestamp};

/// Naive timestamp layouts accepted for `last_update`.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%a %b %d %Y %H:%M:%S",
];

/// Date-only layouts accepted for `last_update`, read as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Latest epoch-millisecond timestamp accepted (end of year 9999).
const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

/// Normalize one wire record, using the current time for a missing `last_update`.
pub fn normalize_bus(raw: &Value) -> Option<BusState> {
    normalize_bus_at(raw, Local::now().naive_local())
}

/// Normalize one wire record with an explicit "now".
///
/// # Examples
///
/// ```
/// use bus_tracker::normalize::normalize_bus_at;
/// use chrono::NaiveDate;
/// use serde_json::json;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(7, 0, 0).unwrap();
///
/// assert!(normalize_bus_at(&json!(null), now).is_none());
///
/// let bus = normalize_bus_at(&json!({"number": "VV-1", "eta_minutes": "bad"}), now).unwrap();
/// assert_eq!(bus.number, "VV-1");
/// assert_eq!(bus.eta_minutes, 0);
/// assert_eq!(bus.driver, "N/A");
/// ```
pub fn normalize_bus_at(raw: &Value, now: NaiveDateTime) -> Option<BusState> {
    let Some(obj) = raw.as_object() else {
        warn!(kind = value_kind(raw), "dropping non-object bus record");
        return None;
    };

    let last_update = display_last_update(obj.get("last_update"), now);

    let capacity = count_field(obj, "capacity", DEFAULT_CAPACITY);
    let occupancy = count_field(obj, "occupancy", 0).min(capacity);
    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .and_then(BusStatus::parse)
        .unwrap_or_default();

    Some(BusState {
        id: id_field(obj.get("id")),
        number: text_field(obj, "number", ""),
        route: text_field(obj, "route", ""),
        driver: text_field(obj, "driver_name", "N/A"),
        driver_phone: text_field(obj, "driver_phone", ""),
        current_stop: text_field(obj, "current_stop", "Unknown"),
        next_stop: text_field(obj, "next_stop", "Unknown"),
        eta_minutes: count_field(obj, "eta_minutes", 0),
        delay: count_field(obj, "delay_minutes", 0),
        occupancy,
        capacity,
        status,
        last_update,
    })
}

/// Normalize a response body.
///
/// An array is normalized element-wise with failed records dropped; any
/// other value yields an empty collection.
pub fn normalize_buses(raw: &Value) -> Vec<BusState> {
    normalize_buses_at(raw, Local::now().naive_local())
}

/// [`normalize_buses`] with an explicit "now".
pub fn normalize_buses_at(raw: &Value, now: NaiveDateTime) -> Vec<BusState> {
    match raw {
        Value::Array(items) => items.iter().filter_map(|v| normalize_bus_at(v, now)).collect(),
        other => {
            warn!(kind = value_kind(other), "bus response is not an array");
            Vec::new()
        }
    }
}

fn id_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A string field; numbers are rendered, anything else uses the default.
fn text_field(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// A non-negative count; fractions are truncated, anything else uses the default.
fn count_field(obj: &Map<String, Value>, key: &str, default: u32) -> u32 {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .unwrap_or(default)
}

/// Display string for `last_update`.
///
/// Absent, null, empty and zero values mean "now"; so does anything
/// unreadable, which is logged.
fn display_last_update(value: Option<&Value>, now: NaiveDateTime) -> String {
    let parsed = match value {
        None | Some(Value::Null) => Some(now),
        Some(Value::String(s)) if s.trim().is_empty() => Some(now),
        Some(Value::String(s)) => parse_timestamp(s.trim()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Some(now),
        Some(Value::Number(n)) => n
            .as_i64()
            .filter(|m| (0..=MAX_EPOCH_MILLIS).contains(m))
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.with_timezone(&Local).naive_local()),
        Some(_) => None,
    };

    let parsed = parsed.unwrap_or_else(|| {
        warn!(value = ?value, "unreadable last_update, using current time");
        now
    });
    format_display_timestamp(parsed)
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
