//! DCIM adapters
//!
//! Handles: netbox_device_bay

mod device_bay;

#[cfg(test)]
mod device_bay_test;

pub use device_bay::DeviceBayResource;
