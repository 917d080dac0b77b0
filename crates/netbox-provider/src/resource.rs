//! Resource adapter trait
//!
//! One implementation per managed NetBox object type. Every operation takes the client
//! by trait object so adapters run unchanged against [`netbox_client::NetBoxClient`] or
//! the in-memory mock.

use crate::data::ResourceData;
use crate::error::ProviderError;
use crate::schema::Schema;
use async_trait::async_trait;
use netbox_client::NetBoxClientTrait;
use tracing::info;

#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name used by the host tool, e.g. `netbox_circuit`
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> Schema;

    /// Validate the record, create the remote object, store its ID, then read it back.
    async fn create(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Refresh the record from NetBox. A missing object clears the ID instead of failing.
    async fn read(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Validate the record, replace the remote object's fields, then read it back.
    async fn update(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Delete the remote object. A missing object counts as deleted.
    async fn delete(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError>;

    /// Adopt an existing object by ID.
    async fn import(&self, api: &dyn NetBoxClientTrait, id: &str) -> Result<ResourceData, ProviderError> {
        let mut data = ResourceData::with_id(id);
        self.read(api, &mut data).await?;
        if !data.has_id() {
            return Err(ProviderError::ImportNotFound {
                resource: self.type_name().to_string(),
                id: id.to_string(),
            });
        }
        info!("Imported {} {}", self.type_name(), id);
        Ok(data)
    }

    /// Delete every object whose name starts with `prefix`; returns how many were removed.
    async fn sweep(&self, api: &dyn NetBoxClientTrait, prefix: &str) -> Result<usize, ProviderError>;
}
