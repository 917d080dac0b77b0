//! NetBox API models
//!
//! These models match the NetBox REST API serializers.
//! See: netbox/circuits/api/serializers_/circuits.py, netbox/dcim/api/serializers_/device_components.py
//!
//! Read models (`Circuit`, `ProviderNetwork`, `DeviceBay`) mirror what NetBox returns:
//! related objects come back as nested objects. Writable models (`Writable*`) mirror what
//! NetBox accepts on POST/PATCH: related objects are plain integer IDs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Free-form custom field values, keyed by custom field name
pub type CustomFields = serde_json::Map<String, serde_json::Value>;

/// Choice field as rendered by NetBox (`{"value": "active", "label": "Active"}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceValue {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

/// Circuit model matching NetBox CircuitSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Circuit {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub cid: String,
    pub provider: Option<NestedProvider>,
    #[serde(rename = "type")]
    pub circuit_type: Option<NestedCircuitType>,
    pub status: ChoiceValue,
    #[serde(default)]
    pub tenant: Option<NestedTenant>,
    #[serde(default)]
    pub install_date: Option<NaiveDate>,
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    #[serde(default)]
    pub commit_rate: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default)]
    pub created: Option<String>, // ISO 8601 datetime
    #[serde(default)]
    pub last_updated: Option<String>, // ISO 8601 datetime
}

/// Request body for creating or patching a circuit (WritableCircuitRequest)
///
/// Nullable fields serialize as `null` when unset so a PATCH clears them on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WritableCircuit {
    pub cid: String,
    pub provider: u64,
    #[serde(rename = "type")]
    pub circuit_type: u64,
    pub status: String,
    pub tenant: Option<u64>,
    pub install_date: Option<NaiveDate>,
    pub termination_date: Option<NaiveDate>,
    pub commit_rate: Option<i64>,
    pub description: String,
    pub comments: String,
    pub tags: Vec<TagReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Provider network model matching NetBox ProviderNetworkSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ProviderNetwork {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub provider: Option<NestedProvider>,
    pub name: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Request body for creating or patching a provider network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WritableProviderNetwork {
    pub provider: u64,
    pub name: String,
    pub service_id: String,
    pub description: String,
    pub comments: String,
    pub tags: Vec<TagReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Device bay model matching NetBox DeviceBaySerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct DeviceBay {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub device: Option<NestedDevice>,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub installed_device: Option<NestedDevice>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Request body for creating or patching a device bay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct WritableDeviceBay {
    pub device: u64,
    pub name: String,
    pub label: String,
    pub description: String,
    pub installed_device: Option<u64>,
    pub tags: Vec<TagReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Tag model (from Extras API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

/// Tag reference accepted on writes; NetBox resolves it by name and slug
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagReference {
    pub name: String,
    pub slug: String,
}

impl From<&Tag> for TagReference {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        }
    }
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedProvider {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedCircuitType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTenant {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedDevice {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: Option<String>, // unnamed devices are allowed
}
