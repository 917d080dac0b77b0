//! Circuits adapters
//!
//! Handles: netbox_circuit, netbox_circuit_provider_network

mod circuit;
mod provider_network;


pub use circuit::{CIRCUIT_STATUSES, CircuitResource};
pub use provider_network::ProviderNetworkResource;
