//! Helper functions for creating nested NetBox model types

use crate::error::NetBoxError;
use crate::models::*;
use std::collections::HashMap;

/// Lowercase, dash-separated slug as NetBox generates it in the UI
pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Helper functions for creating nested types in mock implementations
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Helper to create NestedProvider
    pub fn create_nested_provider(&self, id: u64, name: Option<String>) -> NestedProvider {
        let name_str = name.unwrap_or_else(|| format!("Provider {}", id));
        NestedProvider {
            id,
            url: format!("{}/api/circuits/providers/{}/", self.base_url, id),
            display: name_str.clone(),
            name: name_str.clone(),
            slug: slugify(&name_str),
        }
    }

    /// Helper to create NestedCircuitType
    pub fn create_nested_circuit_type(&self, id: u64, name: Option<String>) -> NestedCircuitType {
        let name_str = name.unwrap_or_else(|| format!("Circuit Type {}", id));
        NestedCircuitType {
            id,
            url: format!("{}/api/circuits/circuit-types/{}/", self.base_url, id),
            display: name_str.clone(),
            name: name_str.clone(),
            slug: slugify(&name_str),
        }
    }

    /// Helper to create NestedTenant
    pub fn create_nested_tenant(&self, id: u64, name: Option<String>) -> NestedTenant {
        let name_str = name.unwrap_or_else(|| format!("Tenant {}", id));
        NestedTenant {
            id,
            url: format!("{}/api/tenancy/tenants/{}/", self.base_url, id),
            display: name_str.clone(),
            name: name_str.clone(),
            slug: slugify(&name_str),
        }
    }

    /// Helper to create NestedDevice
    pub fn create_nested_device(&self, id: u64, name: Option<String>) -> NestedDevice {
        NestedDevice {
            id,
            url: format!("{}/api/dcim/devices/{}/", self.base_url, id),
            display: name.clone().unwrap_or_else(|| format!("Device {}", id)),
            name,
        }
    }

    /// Resolve write-side tag references against the stored tags, like NetBox does.
    ///
    /// An unknown tag is rejected with a 400, matching NetBox's "Related object not found".
    pub fn resolve_tags(
        &self,
        tags: &HashMap<u64, Tag>,
        references: &[TagReference],
    ) -> Result<Vec<NestedTag>, NetBoxError> {
        references
            .iter()
            .map(|reference| {
                tags.values()
                    .find(|t| t.name == reference.name && t.slug == reference.slug)
                    .map(|t| NestedTag {
                        id: t.id,
                        url: t.url.clone(),
                        display: t.display.clone(),
                        name: t.name.clone(),
                        slug: t.slug.clone(),
                    })
                    .ok_or_else(|| NetBoxError::Api {
                        status: 400,
                        message: format!(
                            "Related object not found using the provided attributes: name={}, slug={}",
                            reference.name, reference.slug
                        ),
                    })
            })
            .collect()
    }
}
