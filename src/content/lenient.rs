//! Lenient deserializers for the content file.
//!
//! The content file is hand-edited, so every field is optional and every list
//! tolerates junk entries. These helpers fill defaults at the parse boundary so the
//! pipeline and section generators never re-check whether a key was present.
//!
//! Rules:
//! - Scalars (string, number, bool) coerce to text; `null`, arrays and objects do not.
//! - A list entry that fails to deserialize is dropped (logged at debug).
//! - A list-typed key holding a non-list value is treated as empty (logged at warn).
//! - A mapping-typed key holding a non-mapping value falls back to `Default`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON scalar to trimmed text. Returns `None` for null and containers.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Optional text field: present scalars become `Some`, everything else `None`.
/// Empty strings are kept as `Some("")` so presence checks still see the key.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

/// Text field that remembers its key was present. Used with `#[serde(default)]`:
/// an absent key stays `None`, a present one becomes `Some(value)` where `value`
/// is `None` for null and containers.
pub fn present_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(scalar_text(&value)))
}

/// Text field with an empty-string default.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

/// Optional text field where an empty string counts as absent (links, image paths).
pub fn non_empty_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).filter(|s| !s.is_empty()))
}

/// List of strings; non-scalar entries are dropped, scalars coerce to text.
/// Items are not trimmed here beyond `scalar_text`; blank items survive so the
/// bullet grouper can apply its own skipping rule.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_items(value, "text list"))
}

/// List of typed entries; entries that fail to deserialize are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(typed_items(value))
}

/// Mapping-typed field; a value of the wrong shape falls back to `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", std::any::type_name::<T>(), e);
            Ok(T::default())
        }
    }
}

/// Optional mapping-typed field; a value of the wrong shape becomes `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", std::any::type_name::<T>(), e);
            Ok(None)
        }
    }
}

pub(crate) fn text_items(value: Value, what: &str) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let text = scalar_text(item);
                if text.is_none() {
                    tracing::debug!("Dropping non-text entry in {}: {}", what, item);
                }
                text
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!("Expected a list for {}, found {}", what, json_kind(&other));
            Vec::new()
        }
    }
}

fn typed_items<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<T>(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::debug!(
                        "Dropping malformed {} entry: {}",
                        std::any::type_name::<T>(),
                        e
                    );
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                "Expected a list of {}, found {}",
                std::any::type_name::<T>(),
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
