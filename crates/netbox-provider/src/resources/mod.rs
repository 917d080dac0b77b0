//! Resource adapters, grouped by NetBox application
//!
//! - `circuits` - circuits and provider networks
//! - `dcim` - device bays

pub mod circuits;
pub mod dcim;

pub use circuits::{CircuitResource, ProviderNetworkResource};
pub use dcim::DeviceBayResource;
