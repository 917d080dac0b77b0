//! `netbox_device_bay` adapter
//!
//! A device bay is a slot in a parent device that can hold one child device.

use crate::data::ResourceData;
use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resource_helpers::{
    custom_fields_value, deleted_or_gone, found_or_cleared, get_custom_fields, get_optional_id,
    get_optional_str, get_tag_references, nullable, parse_id, require_id, require_str,
    tag_list_value,
};
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::{DeviceBay, NetBoxClientTrait, NetBoxError, WritableDeviceBay};
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceBayResource;

impl DeviceBayResource {
    pub const TYPE_NAME: &'static str = "netbox_device_bay";

    async fn writable(
        &self,
        api: &dyn NetBoxClientTrait,
        data: &ResourceData,
    ) -> Result<WritableDeviceBay, ProviderError> {
        self.schema().validate(data)?;

        let device = require_id(data, "device_id")?;
        let name = require_str(data, "name")?;
        let installed_device = get_optional_id(data, "installed_device")?;
        let tags = get_tag_references(api, data).await?;

        Ok(WritableDeviceBay {
            device,
            name,
            label: get_optional_str(data, "label"),
            description: get_optional_str(data, "description"),
            installed_device,
            tags,
            custom_fields: get_custom_fields(data),
        })
    }

    fn apply(bay: &DeviceBay, data: &mut ResourceData) {
        data.set_id(bay.id);
        data.set("device_id", nullable(bay.device.as_ref().map(|d| d.id)));
        data.set("name", bay.name.as_str());
        data.set("label", bay.label.as_str());
        data.set("description", bay.description.as_str());
        data.set("installed_device", nullable(bay.installed_device.as_ref().map(|d| d.id)));
        data.set("tags", tag_list_value(&bay.tags));
        data.set("custom_fields", custom_fields_value(&bay.custom_fields));
    }
}

#[async_trait]
impl Resource for DeviceBayResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new("Manages a device bay in NetBox. Device bays hold child devices installed in a parent device.")
            .with_attribute(
                "device_id",
                Attribute::required_int().with_description("ID of the parent device."),
            )
            .with_attribute("name", Attribute::required_string())
            .with_attribute("label", Attribute::optional_string())
            .with_attribute("description", Attribute::optional_string())
            .with_attribute(
                "installed_device",
                Attribute::optional_int().with_description("ID of the child device installed in the bay."),
            )
            .with_tags_and_custom_fields()
    }

    async fn create(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let body = self.writable(api, data).await?;

        info!("Creating device bay {} on device {} in NetBox", body.name, body.device);
        let created = api.create_device_bay(&body).await?;
        info!("Created device bay {} (ID: {})", created.name, created.id);

        data.set_id(created.id);
        self.read(api, data).await
    }

    async fn read(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        debug!("Reading device bay {}", id);

        if let Some(bay) = found_or_cleared(api.get_device_bay(id).await, data, "Device bay")? {
            Self::apply(&bay, data);
        }
        Ok(())
    }

    async fn update(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        let body = self.writable(api, data).await?;

        info!("Updating device bay {} (ID: {}) in NetBox", body.name, id);
        api.update_device_bay(id, &body).await?;

        self.read(api, data).await
    }

    async fn delete(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;

        info!("Deleting device bay {} from NetBox", id);
        deleted_or_gone(api.delete_device_bay(id).await, data, "Device bay")
    }

    async fn sweep(&self, api: &dyn NetBoxClientTrait, prefix: &str) -> Result<usize, ProviderError> {
        let bays = api.query_device_bays(&[], true).await?;
        let mut removed = 0;
        for bay in bays.iter().filter(|b| b.name.starts_with(prefix)) {
            match api.delete_device_bay(bay.id).await {
                Ok(()) => {
                    info!("Swept device bay {} (ID: {})", bay.name, bay.id);
                    removed += 1;
                }
                Err(NetBoxError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }
}
