//! NetBox resource provider
//!
//! Adapters that let a declarative infrastructure tool manage NetBox objects:
//!
//! - `netbox_circuit` - circuits
//! - `netbox_circuit_provider_network` - provider networks
//! - `netbox_device_bay` - device bays
//!
//! Each adapter implements [`Resource`]: create, read, update, delete and import over a
//! flat [`ResourceData`] record, talking to NetBox through
//! [`netbox_client::NetBoxClientTrait`].
//!
//! # Example
//!
//! ```no_run
//! use netbox_provider::{Provider, ProviderConfig, ResourceData};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProviderConfig::load(None)?.build_client()?;
//! let provider = Provider::new();
//!
//! let mut bay = ResourceData::from_values([("device_id", json!(1)), ("name", json!("Bay 1"))]);
//! provider.resource("netbox_device_bay")?.create(&client, &mut bay).await?;
//! println!("created device bay {}", bay.id());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod provider;
pub mod resource;
pub mod resource_helpers;
pub mod resources;
pub mod schema;

#[cfg(test)]
mod test_utils;

pub use config::ProviderConfig;
pub use data::ResourceData;
pub use error::ProviderError;
pub use provider::Provider;
pub use resource::Resource;
pub use schema::{Attribute, AttributeType, Presence, Schema, Validation};
