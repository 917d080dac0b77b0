//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `circuits.rs` - Circuits operations (circuits, provider networks)
//! - `dcim.rs` - DCIM operations (device bays)
//! - `extras.rs` - Extras operations (tags)
//! - `helpers.rs` - Helper functions for creating nested types
//!
//! Every trait call is appended to a call log (see [`MockNetBoxClient::calls`]) so tests can
//! assert that local validation stopped an operation before it reached the API, and any
//! operation can be forced to fail with an HTTP status via [`MockNetBoxClient::fail_with`].

mod circuits;
mod dcim;
mod extras;
mod helpers;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) circuits: Arc<Mutex<HashMap<u64, Circuit>>>,
    pub(crate) provider_networks: Arc<Mutex<HashMap<u64, ProviderNetwork>>>,
    pub(crate) device_bays: Arc<Mutex<HashMap<u64, DeviceBay>>>,
    pub(crate) tags: Arc<Mutex<HashMap<u64, Tag>>>,
    // Related objects referenced by ID from writable requests
    pub(crate) providers: Arc<Mutex<HashMap<u64, String>>>,
    pub(crate) circuit_types: Arc<Mutex<HashMap<u64, String>>>,
    pub(crate) tenants: Arc<Mutex<HashMap<u64, String>>>,
    pub(crate) devices: Arc<Mutex<HashMap<u64, String>>>,
    // Call log and injected failures, keyed by trait method name
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
    pub(crate) failures: Arc<Mutex<HashMap<String, u16>>>,
    // Counter for generating IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            circuits: Arc::new(Mutex::new(HashMap::new())),
            provider_networks: Arc::new(Mutex::new(HashMap::new())),
            device_bays: Arc::new(Mutex::new(HashMap::new())),
            tags: Arc::new(Mutex::new(HashMap::new())),
            providers: Arc::new(Mutex::new(HashMap::new())),
            circuit_types: Arc::new(Mutex::new(HashMap::new())),
            tenants: Arc::new(Mutex::new(HashMap::new())),
            devices: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add a tag to the mock store (for test setup)
    pub fn add_tag(&self, name: &str) -> Tag {
        let id = self.next_id();
        let tag = Tag {
            id,
            url: format!("{}/api/extras/tags/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            slug: helpers::slugify(name),
            color: "9e9e9e".to_string(),
            description: String::new(),
        };
        lock(&self.tags).insert(id, tag.clone());
        tag
    }

    /// Register a circuit provider that circuits and provider networks may reference
    pub fn add_provider(&self, name: &str) -> u64 {
        let id = self.next_id();
        lock(&self.providers).insert(id, name.to_string());
        id
    }

    /// Register a circuit type that circuits may reference
    pub fn add_circuit_type(&self, name: &str) -> u64 {
        let id = self.next_id();
        lock(&self.circuit_types).insert(id, name.to_string());
        id
    }

    /// Register a tenant that circuits may reference
    pub fn add_tenant(&self, name: &str) -> u64 {
        let id = self.next_id();
        lock(&self.tenants).insert(id, name.to_string());
        id
    }

    /// Register a device that device bays may reference
    pub fn add_device(&self, name: &str) -> u64 {
        let id = self.next_id();
        lock(&self.devices).insert(id, name.to_string());
        id
    }

    /// Add a circuit to the mock store (for test setup)
    pub fn add_circuit(&self, circuit: Circuit) {
        lock(&self.circuits).insert(circuit.id, circuit);
    }

    /// Add a provider network to the mock store (for test setup)
    pub fn add_provider_network(&self, network: ProviderNetwork) {
        lock(&self.provider_networks).insert(network.id, network);
    }

    /// Add a device bay to the mock store (for test setup)
    pub fn add_device_bay(&self, bay: DeviceBay) {
        lock(&self.device_bays).insert(bay.id, bay);
    }

    /// Stored circuit, bypassing the call log
    pub fn circuit(&self, id: u64) -> Option<Circuit> {
        lock(&self.circuits).get(&id).cloned()
    }

    /// Stored provider network, bypassing the call log
    pub fn provider_network(&self, id: u64) -> Option<ProviderNetwork> {
        lock(&self.provider_networks).get(&id).cloned()
    }

    /// Stored device bay, bypassing the call log
    pub fn device_bay(&self, id: u64) -> Option<DeviceBay> {
        lock(&self.device_bays).get(&id).cloned()
    }

    /// Remove a circuit behind the client's back (out-of-band deletion)
    pub fn remove_circuit(&self, id: u64) {
        lock(&self.circuits).remove(&id);
    }

    /// Remove a provider network behind the client's back
    pub fn remove_provider_network(&self, id: u64) {
        lock(&self.provider_networks).remove(&id);
    }

    /// Remove a device bay behind the client's back
    pub fn remove_device_bay(&self, id: u64) {
        lock(&self.device_bays).remove(&id);
    }

    /// Make every subsequent call to `operation` fail with the given HTTP status
    pub fn fail_with(&self, operation: &str, status: u16) {
        lock(&self.failures).insert(operation.to_string(), status);
    }

    /// Clear all injected failures
    pub fn clear_failures(&self) {
        lock(&self.failures).clear();
    }

    /// Names of the trait methods called so far, in order
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Number of calls made to one trait method
    pub fn call_count(&self, operation: &str) -> usize {
        lock(&self.calls).iter().filter(|c| c.as_str() == operation).count()
    }

    /// Forget the call log
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Log a call and apply any injected failure for it
    pub(crate) fn record(&self, operation: &str) -> Result<(), NetBoxError> {
        lock(&self.calls).push(operation.to_string());
        match lock(&self.failures).get(operation).copied() {
            None => Ok(()),
            Some(404) => Err(NetBoxError::NotFound(format!("{} (injected)", operation))),
            Some(status @ (401 | 403)) => Err(NetBoxError::Authentication(format!(
                "{} (injected {})",
                operation, status
            ))),
            Some(status) => Err(NetBoxError::Api {
                status,
                message: format!("{} failed (injected)", operation),
            }),
        }
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = lock(&self.next_id);
        let current = *id;
        *id += 1;
        current
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.record("validate_token")
    }

    // Circuits Operations - delegated to circuits module
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        circuits::get_circuit(self, id).await
    }

    async fn create_circuit(&self, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        circuits::create_circuit(self, data).await
    }

    async fn update_circuit(&self, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        circuits::update_circuit(self, id, data).await
    }

    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        circuits::delete_circuit(self, id).await
    }

    async fn query_circuits(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Circuit>, NetBoxError> {
        circuits::query_circuits(self, filters, fetch_all).await
    }

    async fn get_provider_network(&self, id: u64) -> Result<ProviderNetwork, NetBoxError> {
        circuits::get_provider_network(self, id).await
    }

    async fn create_provider_network(&self, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        circuits::create_provider_network(self, data).await
    }

    async fn update_provider_network(&self, id: u64, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        circuits::update_provider_network(self, id, data).await
    }

    async fn delete_provider_network(&self, id: u64) -> Result<(), NetBoxError> {
        circuits::delete_provider_network(self, id).await
    }

    async fn query_provider_networks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<ProviderNetwork>, NetBoxError> {
        circuits::query_provider_networks(self, filters, fetch_all).await
    }

    // DCIM Operations - delegated to dcim module
    async fn get_device_bay(&self, id: u64) -> Result<DeviceBay, NetBoxError> {
        dcim::get_device_bay(self, id).await
    }

    async fn create_device_bay(&self, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        dcim::create_device_bay(self, data).await
    }

    async fn update_device_bay(&self, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        dcim::update_device_bay(self, id, data).await
    }

    async fn delete_device_bay(&self, id: u64) -> Result<(), NetBoxError> {
        dcim::delete_device_bay(self, id).await
    }

    async fn query_device_bays(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceBay>, NetBoxError> {
        dcim::query_device_bays(self, filters, fetch_all).await
    }

    // Extras Operations - delegated to extras module
    async fn query_tags(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tag>, NetBoxError> {
        extras::query_tags(self, filters, fetch_all).await
    }
}
