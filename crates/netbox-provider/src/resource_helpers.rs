//! Helper functions for common resource adapter patterns
//!
//! Field extraction with the absence policies NetBox expects (empty string versus null),
//! tag and custom field mapping, and the not-found handling shared by every adapter.

use crate::data::ResourceData;
use crate::error::ProviderError;
use chrono::NaiveDate;
use netbox_client::{CustomFields, NestedTag, NetBoxClientTrait, NetBoxError, TagReference};
use serde_json::Value;
use tracing::{debug, warn};

/// Date format used by NetBox for date-only fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a record ID into a NetBox integer ID
pub fn parse_id(id: &str) -> Result<u64, ProviderError> {
    id.parse::<u64>()
        .map_err(|_| ProviderError::InvalidId(id.to_string()))
}

/// Required string field
pub fn require_str(data: &ResourceData, field: &str) -> Result<String, ProviderError> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::MissingRequired(field.to_string()))
}

/// Required reference to another NetBox object by integer ID
pub fn require_id(data: &ResourceData, field: &str) -> Result<u64, ProviderError> {
    data.get(field)
        .ok_or_else(|| ProviderError::MissingRequired(field.to_string()))
        .and_then(|value| id_value(field, value))
}

/// Optional string field; absent means empty string
pub fn get_optional_str(data: &ResourceData, field: &str) -> String {
    data.get_str(field).unwrap_or_default().to_string()
}

/// Optional integer field; absent or zero means null
pub fn get_optional_int(data: &ResourceData, field: &str) -> Result<Option<i64>, ProviderError> {
    data.get_ok(field)
        .map(|value| {
            value.as_i64().ok_or_else(|| ProviderError::InvalidValue {
                field: field.to_string(),
                message: format!("expected an integer, got {}", value),
            })
        })
        .transpose()
}

/// Optional reference by integer ID; absent or zero means null
pub fn get_optional_id(data: &ResourceData, field: &str) -> Result<Option<u64>, ProviderError> {
    data.get_ok(field)
        .map(|value| id_value(field, value))
        .transpose()
}

fn id_value(field: &str, value: &Value) -> Result<u64, ProviderError> {
    value.as_u64().ok_or_else(|| ProviderError::InvalidValue {
        field: field.to_string(),
        message: format!("expected a positive integer ID, got {}", value),
    })
}

/// Optional `YYYY-MM-DD` date; absent or empty means null, anything else must parse
pub fn get_optional_date(data: &ResourceData, field: &str) -> Result<Option<NaiveDate>, ProviderError> {
    let Some(text) = data.get_str(field) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|source| ProviderError::InvalidDate {
            field: field.to_string(),
            value: text.to_string(),
            source,
        })
}

/// Date as stored in a record: `YYYY-MM-DD` text, or null
pub fn date_value(date: Option<NaiveDate>) -> Value {
    date.map(|d| Value::String(d.format(DATE_FORMAT).to_string()))
        .unwrap_or(Value::Null)
}

/// Optional scalar as stored in a record, null when absent
pub fn nullable<T: Into<Value>>(value: Option<T>) -> Value {
    value.map(Into::into).unwrap_or(Value::Null)
}

/// Resolve the record's tag names into write-side tag references.
///
/// Each name is looked up with a limit of two results and must match exactly one tag.
pub async fn get_tag_references(
    api: &dyn NetBoxClientTrait,
    data: &ResourceData,
) -> Result<Vec<TagReference>, ProviderError> {
    let names: Vec<&str> = data
        .get_ok("tags")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut references = Vec::with_capacity(names.len());
    for name in names {
        let matches = api.query_tags(&[("name", name), ("limit", "2")], false).await?;
        match matches.as_slice() {
            [tag] => {
                debug!("Resolved tag '{}' to ID {}", name, tag.id);
                references.push(TagReference::from(tag));
            }
            _ => {
                return Err(ProviderError::TagNotUnique {
                    tag: name.to_string(),
                    matches: matches.len(),
                });
            }
        }
    }
    Ok(references)
}

/// Tag names as stored in a record, sorted since the field is a set
pub fn tag_list_value(tags: &[NestedTag]) -> Value {
    let mut names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    Value::from(names)
}

/// Custom field values to send; `None` when the record has none
pub fn get_custom_fields(data: &ResourceData) -> Option<CustomFields> {
    data.get_ok("custom_fields")
        .and_then(Value::as_object)
        .cloned()
}

/// Custom field values as stored in a record; fields NetBox reports as null are dropped
pub fn custom_fields_value(fields: &CustomFields) -> Value {
    Value::Object(
        fields
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

/// Treat a 404 on read as "the object is gone".
///
/// Returns `Ok(None)` after clearing the record's ID so the host tool plans a re-create.
/// Every other error is returned unchanged and the ID is kept.
pub fn found_or_cleared<T>(
    result: Result<T, NetBoxError>,
    data: &mut ResourceData,
    resource_name: &str,
) -> Result<Option<T>, ProviderError> {
    match result {
        Ok(object) => Ok(Some(object)),
        Err(NetBoxError::NotFound(_)) => {
            warn!("{} (ID: {}) was deleted in NetBox, clearing ID", resource_name, data.id());
            data.clear_id();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Treat a 404 on delete as success, clearing the record's ID
pub fn deleted_or_gone(
    result: Result<(), NetBoxError>,
    data: &mut ResourceData,
    resource_name: &str,
) -> Result<(), ProviderError> {
    match result {
        Ok(()) => Ok(()),
        Err(NetBoxError::NotFound(_)) => {
            warn!("{} (ID: {}) already deleted in NetBox", resource_name, data.id());
            data.clear_id();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "resource_helpers_test.rs"]
mod resource_helpers_test;
