//! NetBox REST API Client
//!
//! A Rust client library for interacting with the NetBox REST API.
//! Provides type-safe models and methods for the circuit, provider network,
//! device bay and tag endpoints used by the NetBox resource provider.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, WritableDeviceBay};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Create a device bay on device 1
//! let bay = client.create_device_bay(&WritableDeviceBay {
//!     device: 1,
//!     name: "Bay 1".to_string(),
//!     label: String::new(),
//!     description: String::new(),
//!     installed_device: None,
//!     tags: vec![],
//!     custom_fields: None,
//! }).await?;
//!
//! // Read it back, then remove it
//! let bay = client.get_device_bay(bay.id).await?;
//! client.delete_device_bay(bay.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Circuits Operations**: circuits and provider networks
//! - **DCIM Operations**: device bays
//! - **Extras Operations**: tag lookup for write-side tag references
//! - **Status Mapping**: 404 surfaces as [`NetBoxError::NotFound`], other failures keep their status
//! - **Pagination**: Support for fetching all pages of large result sets
//! - **Mocking**: [`MockNetBoxClient`] behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{ClientOptions, NetBoxClient};
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;
