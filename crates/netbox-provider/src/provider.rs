//! Resource registry
//!
//! Maps stable resource type names to their adapters, as exposed to the host tool.

use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resources::{CircuitResource, DeviceBayResource, ProviderNetworkResource};
use crate::schema::Schema;
use netbox_client::NetBoxClientTrait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of every resource type this provider manages
#[derive(Clone)]
pub struct Provider {
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
}

impl Provider {
    pub fn new() -> Self {
        let mut provider = Self {
            resources: BTreeMap::new(),
        };
        provider.register(Arc::new(CircuitResource));
        provider.register(Arc::new(ProviderNetworkResource));
        provider.register(Arc::new(DeviceBayResource));
        provider
    }

    fn register(&mut self, resource: Arc<dyn Resource>) {
        self.resources.insert(resource.type_name(), resource);
    }

    /// Adapter for a resource type name
    pub fn resource(&self, type_name: &str) -> Result<Arc<dyn Resource>, ProviderError> {
        self.resources
            .get(type_name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    /// Registered type names, sorted
    pub fn resource_types(&self) -> Vec<&'static str> {
        self.resources.keys().copied().collect()
    }

    pub fn schemas(&self) -> BTreeMap<&'static str, Schema> {
        self.resources
            .iter()
            .map(|(name, resource)| (*name, resource.schema()))
            .collect()
    }

    /// Run the registered sweepers (or only `only`) for objects named with `prefix`.
    ///
    /// Returns the number of objects removed per resource type.
    pub async fn sweep(
        &self,
        api: &dyn NetBoxClientTrait,
        prefix: &str,
        only: Option<&str>,
    ) -> Result<BTreeMap<&'static str, usize>, ProviderError> {
        if prefix.is_empty() {
            return Err(ProviderError::InvalidConfig(
                "sweep prefix must not be empty".to_string(),
            ));
        }

        let names: Vec<&'static str> = match only {
            Some(name) => vec![self.resource(name)?.type_name()],
            None => self.resource_types(),
        };

        let mut removed = BTreeMap::new();
        for name in names {
            let resource = self.resource(name)?;
            let count = resource.sweep(api, prefix).await?;
            if count > 0 {
                warn!("Sweeper removed {} {} objects with prefix '{}'", count, name, prefix);
            } else {
                info!("Sweeper found no {} objects with prefix '{}'", name, prefix);
            }
            removed.insert(name, count);
        }
        Ok(removed)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resource_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_registers_three_resource_types() {
        let provider = Provider::new();
        assert_eq!(
            provider.resource_types(),
            vec!["netbox_circuit", "netbox_circuit_provider_network", "netbox_device_bay"]
        );
    }

    #[test]
    fn test_unknown_resource_type() {
        let err = Provider::new().resource("netbox_site").err();
        assert!(matches!(err, Some(ProviderError::UnknownResource(ref n)) if n == "netbox_site"));
    }

    #[test]
    fn test_circuit_schema_lists_statuses() {
        let schemas = Provider::new().schemas();
        let status = schemas["netbox_circuit"].attribute("status").cloned().unwrap();
        assert!(status.is_required());
        assert!(status.description.contains("`decommissioning`"));
    }

    #[tokio::test]
    async fn test_sweep_all_types() {
        let fx = circuit_fixture();
        let device = fx.mock.add_device("chassis");
        let provider = Provider::new();

        let mut circuit = circuit_record("tf-test-1", fx.provider_id, fx.type_id);
        provider.resource("netbox_circuit").unwrap().create(&fx.mock, &mut circuit).await.unwrap();
        let mut bay = device_bay_record("tf-test-bay", device);
        provider.resource("netbox_device_bay").unwrap().create(&fx.mock, &mut bay).await.unwrap();
        let mut keep = device_bay_record("keep-me", device);
        provider.resource("netbox_device_bay").unwrap().create(&fx.mock, &mut keep).await.unwrap();

        let removed = provider.sweep(&fx.mock, "tf-test", None).await.unwrap();
        assert_eq!(removed["netbox_circuit"], 1);
        assert_eq!(removed["netbox_device_bay"], 1);
        assert_eq!(removed["netbox_circuit_provider_network"], 0);
    }

    #[tokio::test]
    async fn test_sweep_rejects_empty_prefix() {
        let fx = circuit_fixture();
        let err = Provider::new().sweep(&fx.mock, "", None).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig(_)));
        assert!(fx.mock.calls().is_empty());
    }
}
