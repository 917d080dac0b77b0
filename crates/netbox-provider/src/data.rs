//! Resource records exchanged with the host tool
//!
//! A [`ResourceData`] is the flat attribute map for one managed object plus its
//! identifier. The identifier is the NetBox integer ID rendered as a string, or empty
//! when the object is not (or no longer) tracked.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One resource record: an ID plus named attribute values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    id: String,
    #[serde(flatten)]
    values: BTreeMap<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record with only an ID set, as used by import
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Build a record from `(field, value)` pairs
    pub fn from_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            id: String::new(),
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: u64) {
        self.id = id.to_string();
    }

    /// Stop tracking the remote object
    pub fn clear_id(&mut self) {
        self.id.clear();
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Value of a field, `None` when absent or null
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field).filter(|v| !v.is_null())
    }

    /// Value of a field only when it is set to a non-zero value.
    ///
    /// Empty strings, `0`, `false`, empty lists and empty maps count as unset, so an
    /// optional field explicitly set to its zero value behaves as if it were omitted.
    pub fn get_ok(&self, field: &str) -> Option<&Value> {
        self.get(field).filter(|v| !is_zero(v))
    }

    /// String value of a field, if set and non-empty
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get_ok(field).and_then(Value::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn set_null(&mut self, field: impl Into<String>) {
        self.values.insert(field.into(), Value::Null);
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.values.remove(field)
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

/// State files may carry the ID as `"7"` or `7`; both are stored as text
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) if n.is_u64() => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or non-negative integer ID, got {}",
            other
        ))),
    }
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
