//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// This trait enables mocking of NetBox API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // Circuits Operations
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError>;
    async fn create_circuit(&self, data: &WritableCircuit) -> Result<Circuit, NetBoxError>;
    async fn update_circuit(&self, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError>;
    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError>;
    async fn query_circuits(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Circuit>, NetBoxError>;
    async fn get_provider_network(&self, id: u64) -> Result<ProviderNetwork, NetBoxError>;
    async fn create_provider_network(&self, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError>;
    async fn update_provider_network(&self, id: u64, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError>;
    async fn delete_provider_network(&self, id: u64) -> Result<(), NetBoxError>;
    async fn query_provider_networks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<ProviderNetwork>, NetBoxError>;

    // DCIM Operations
    async fn get_device_bay(&self, id: u64) -> Result<DeviceBay, NetBoxError>;
    async fn create_device_bay(&self, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError>;
    async fn update_device_bay(&self, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError>;
    async fn delete_device_bay(&self, id: u64) -> Result<(), NetBoxError>;
    async fn query_device_bays(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceBay>, NetBoxError>;

    // Extras Operations
    async fn query_tags(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tag>, NetBoxError>;
}
