//! NetBox API client
//!
//! Implements the NetBox REST API client for the circuit, provider network,
//! device bay and tag endpoints.
//! Based on NetBox API structure: /api/circuits/circuits/, /api/dcim/device-bays/, ...

use crate::common::HttpClient;
use crate::common::query::{collection_path, object_path, query_resources};
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

const CIRCUITS: &str = "circuits/circuits";
const PROVIDER_NETWORKS: &str = "circuits/provider-networks";
const DEVICE_BAYS: &str = "dcim/device-bays";
const TAGS: &str = "extras/tags";

/// Transport options for [`NetBoxClient::with_options`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub allow_insecure_https: bool,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            allow_insecure_https: false,
            headers: BTreeMap::new(),
        }
    }
}

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_options(base_url, token, ClientOptions::default())
    }

    /// Create a new NetBox client with explicit transport options
    pub fn with_options(base_url: String, token: String, options: ClientOptions) -> Result<Self, NetBoxError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| NetBoxError::InvalidRequest(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| NetBoxError::InvalidRequest(format!("invalid value for header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.allow_insecure_https)
            .default_headers(headers)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// Uses the status endpoint as it's lightweight and requires authentication.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError)` - Token is invalid or NetBox is unreachable
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _status: serde_json::Value = self.http.get("/api/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    // Circuits

    /// Get a circuit by ID
    ///
    /// # Returns
    /// * `Ok(Circuit)` - The circuit object
    /// * `Err(NetBoxError::NotFound)` - If NetBox answers 404
    pub async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        debug!("Fetching circuit {} from NetBox", id);
        self.http.get(&object_path(CIRCUITS, id)).await
    }

    /// Create a circuit
    pub async fn create_circuit(&self, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        debug!("Creating circuit {} in NetBox", data.cid);
        let body = serde_json::to_value(data)?;
        self.http.post(&collection_path(CIRCUITS), &body).await
    }

    /// Partially update a circuit
    pub async fn update_circuit(&self, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        debug!("Updating circuit {} in NetBox", id);
        let body = serde_json::to_value(data)?;
        self.http.patch(&object_path(CIRCUITS, id), &body).await
    }

    /// Delete a circuit
    pub async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting circuit {} from NetBox", id);
        self.http.delete(&object_path(CIRCUITS, id)).await
    }

    /// Query circuits by filter
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("cid", "CKT-1")])
    /// * `fetch_all` - If true, fetch all pages (default: false, returns first page only)
    pub async fn query_circuits(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Circuit>, NetBoxError> {
        debug!("Querying circuits with filters: {:?}", filters);
        query_resources(&self.http, CIRCUITS, filters, fetch_all).await
    }

    // Provider networks

    /// Get a provider network by ID
    pub async fn get_provider_network(&self, id: u64) -> Result<ProviderNetwork, NetBoxError> {
        debug!("Fetching provider network {} from NetBox", id);
        self.http.get(&object_path(PROVIDER_NETWORKS, id)).await
    }

    /// Create a provider network
    pub async fn create_provider_network(&self, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        debug!("Creating provider network {} in NetBox", data.name);
        let body = serde_json::to_value(data)?;
        self.http.post(&collection_path(PROVIDER_NETWORKS), &body).await
    }

    /// Partially update a provider network
    pub async fn update_provider_network(&self, id: u64, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        debug!("Updating provider network {} in NetBox", id);
        let body = serde_json::to_value(data)?;
        self.http.patch(&object_path(PROVIDER_NETWORKS, id), &body).await
    }

    /// Delete a provider network
    pub async fn delete_provider_network(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting provider network {} from NetBox", id);
        self.http.delete(&object_path(PROVIDER_NETWORKS, id)).await
    }

    /// Query provider networks by filter
    pub async fn query_provider_networks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<ProviderNetwork>, NetBoxError> {
        debug!("Querying provider networks with filters: {:?}", filters);
        query_resources(&self.http, PROVIDER_NETWORKS, filters, fetch_all).await
    }

    // Device bays

    /// Get a device bay by ID
    pub async fn get_device_bay(&self, id: u64) -> Result<DeviceBay, NetBoxError> {
        debug!("Fetching device bay {} from NetBox", id);
        self.http.get(&object_path(DEVICE_BAYS, id)).await
    }

    /// Create a device bay
    pub async fn create_device_bay(&self, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        debug!("Creating device bay {} on device {} in NetBox", data.name, data.device);
        let body = serde_json::to_value(data)?;
        self.http.post(&collection_path(DEVICE_BAYS), &body).await
    }

    /// Partially update a device bay
    pub async fn update_device_bay(&self, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        debug!("Updating device bay {} in NetBox", id);
        let body = serde_json::to_value(data)?;
        self.http.patch(&object_path(DEVICE_BAYS, id), &body).await
    }

    /// Delete a device bay
    pub async fn delete_device_bay(&self, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting device bay {} from NetBox", id);
        self.http.delete(&object_path(DEVICE_BAYS, id)).await
    }

    /// Query device bays by filter
    pub async fn query_device_bays(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceBay>, NetBoxError> {
        debug!("Querying device bays with filters: {:?}", filters);
        query_resources(&self.http, DEVICE_BAYS, filters, fetch_all).await
    }

    // Extras

    /// Query tags by filter (e.g., [("name", "core"), ("limit", "2")])
    pub async fn query_tags(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tag>, NetBoxError> {
        debug!("Querying tags with filters: {:?}", filters);
        query_resources(&self.http, TAGS, filters, fetch_all).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.validate_token().await
    }

    // Circuits
    async fn get_circuit(&self, id: u64) -> Result<Circuit, NetBoxError> {
        self.get_circuit(id).await
    }

    async fn create_circuit(&self, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        self.create_circuit(data).await
    }

    async fn update_circuit(&self, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
        self.update_circuit(id, data).await
    }

    async fn delete_circuit(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_circuit(id).await
    }

    async fn query_circuits(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Circuit>, NetBoxError> {
        self.query_circuits(filters, fetch_all).await
    }

    // Provider networks
    async fn get_provider_network(&self, id: u64) -> Result<ProviderNetwork, NetBoxError> {
        self.get_provider_network(id).await
    }

    async fn create_provider_network(&self, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        self.create_provider_network(data).await
    }

    async fn update_provider_network(&self, id: u64, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
        self.update_provider_network(id, data).await
    }

    async fn delete_provider_network(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_provider_network(id).await
    }

    async fn query_provider_networks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<ProviderNetwork>, NetBoxError> {
        self.query_provider_networks(filters, fetch_all).await
    }

    // Device bays
    async fn get_device_bay(&self, id: u64) -> Result<DeviceBay, NetBoxError> {
        self.get_device_bay(id).await
    }

    async fn create_device_bay(&self, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        self.create_device_bay(data).await
    }

    async fn update_device_bay(&self, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
        self.update_device_bay(id, data).await
    }

    async fn delete_device_bay(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_device_bay(id).await
    }

    async fn query_device_bays(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<DeviceBay>, NetBoxError> {
        self.query_device_bays(filters, fetch_all).await
    }

    // Extras
    async fn query_tags(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Tag>, NetBoxError> {
        self.query_tags(filters, fetch_all).await
    }
}
