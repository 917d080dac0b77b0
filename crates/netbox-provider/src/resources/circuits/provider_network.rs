//! `netbox_circuit_provider_network` adapter
//!
//! A provider network is a network segment operated by a circuit provider, used as a
//! circuit termination point when the far end is not a site.

use crate::data::ResourceData;
use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resource_helpers::{
    custom_fields_value, deleted_or_gone, found_or_cleared, get_custom_fields, get_optional_str,
    get_tag_references, nullable, parse_id, require_id, require_str, tag_list_value,
};
use crate::schema::{Attribute, Schema, Validation};
use async_trait::async_trait;
use netbox_client::{NetBoxClientTrait, NetBoxError, ProviderNetwork, WritableProviderNetwork};
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProviderNetworkResource;

impl ProviderNetworkResource {
    pub const TYPE_NAME: &'static str = "netbox_circuit_provider_network";

    async fn writable(
        &self,
        api: &dyn NetBoxClientTrait,
        data: &ResourceData,
    ) -> Result<WritableProviderNetwork, ProviderError> {
        self.schema().validate(data)?;

        let provider = require_id(data, "provider_id")?;
        let name = require_str(data, "name")?;
        let tags = get_tag_references(api, data).await?;

        Ok(WritableProviderNetwork {
            provider,
            name,
            service_id: get_optional_str(data, "service_id"),
            description: get_optional_str(data, "description"),
            comments: get_optional_str(data, "comments"),
            tags,
            custom_fields: get_custom_fields(data),
        })
    }

    fn apply(network: &ProviderNetwork, data: &mut ResourceData) {
        data.set_id(network.id);
        data.set("provider_id", nullable(network.provider.as_ref().map(|p| p.id)));
        data.set("name", network.name.as_str());
        data.set("service_id", network.service_id.as_str());
        data.set("description", network.description.as_str());
        data.set("comments", network.comments.as_str());
        data.set("tags", tag_list_value(&network.tags));
        data.set("custom_fields", custom_fields_value(&network.custom_fields));
    }
}

#[async_trait]
impl Resource for ProviderNetworkResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new("Manages a provider network in NetBox. Provider networks represent networks operated by a circuit provider.")
            .with_attribute(
                "provider_id",
                Attribute::required_int().with_description("ID of the provider that operates the network."),
            )
            .with_attribute("name", Attribute::required_string())
            .with_attribute(
                "service_id",
                Attribute::optional_computed_string()
                    .with_validation(Validation::LengthBetween { min: 1, max: 100 }),
            )
            .with_attribute(
                "description",
                Attribute::optional_computed_string()
                    .with_validation(Validation::LengthBetween { min: 1, max: 200 }),
            )
            .with_attribute("comments", Attribute::optional_string())
            .with_tags_and_custom_fields()
    }

    async fn create(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let body = self.writable(api, data).await?;

        info!("Creating provider network {} in NetBox", body.name);
        let created = api.create_provider_network(&body).await?;
        info!("Created provider network {} (ID: {})", created.name, created.id);

        data.set_id(created.id);
        self.read(api, data).await
    }

    async fn read(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        debug!("Reading provider network {}", id);

        let result = api.get_provider_network(id).await;
        if let Some(network) = found_or_cleared(result, data, "Provider network")? {
            Self::apply(&network, data);
        }
        Ok(())
    }

    async fn update(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        let body = self.writable(api, data).await?;

        info!("Updating provider network {} (ID: {}) in NetBox", body.name, id);
        api.update_provider_network(id, &body).await?;

        self.read(api, data).await
    }

    async fn delete(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;

        info!("Deleting provider network {} from NetBox", id);
        deleted_or_gone(api.delete_provider_network(id).await, data, "Provider network")
    }

    async fn sweep(&self, api: &dyn NetBoxClientTrait, prefix: &str) -> Result<usize, ProviderError> {
        let networks = api.query_provider_networks(&[], true).await?;
        let mut removed = 0;
        for network in networks.iter().filter(|n| n.name.starts_with(prefix)) {
            match api.delete_provider_network(network.id).await {
                Ok(()) => {
                    info!("Swept provider network {} (ID: {})", network.name, network.id);
                    removed += 1;
                }
                Err(NetBoxError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }
}
