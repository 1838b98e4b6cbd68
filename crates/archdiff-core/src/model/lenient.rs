//! Per-field lenient readers for the wire documents.
//!
//! Every field is read as a raw `Value` first and then coerced, so one oddly
//! typed field falls back to a default instead of rejecting the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier or codename: strings as-is, other values in their compact JSON
/// spelling, `null` as absent.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

/// Free-text rationale. `null` reads as empty; a list joins its items with a
/// space.
pub(crate) fn prose<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(" "),
        other => value_text(other).unwrap_or_default(),
    })
}

/// Instance count. Floats are truncated and numeric strings parsed; anything
/// else reads as absent.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| truncate(n.as_f64())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| truncate(s.trim().parse::<f64>().ok())),
        _ => None,
    })
}

/// List of raw values. `null` is empty; a lone non-list value is a one-item
/// list.
pub(crate) fn values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// List of nested records. Entries that cannot be read as a record are
/// skipped; a non-list value reads as empty.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        _ => {
            tracing::debug!(component = module_path!(), "ignoring non-list record field");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(
                    component = module_path!(),
                    reason = %e,
                    "skipping unreadable record"
                );
                None
            }
        })
        .collect())
}

/// Single nested record; anything unreadable becomes the default record.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn truncate(float: Option<f64>) -> Option<i64> {
    float.filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
}
