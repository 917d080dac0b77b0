//! Test utilities for unit testing resource adapters
//!
//! Builders for mock NetBox state and for resource records.

use crate::data::ResourceData;
use netbox_client::{ChoiceValue, Circuit, MockNetBoxClient, NestedCircuitType, NestedProvider};
use serde_json::json;

pub const TEST_NETBOX_URL: &str = "http://test-netbox";

/// Mock client with one provider and one circuit type registered
pub struct CircuitFixture {
    pub mock: MockNetBoxClient,
    pub provider_id: u64,
    pub type_id: u64,
}

pub fn circuit_fixture() -> CircuitFixture {
    let mock = MockNetBoxClient::new(TEST_NETBOX_URL);
    let provider_id = mock.add_provider("Acme Transit");
    let type_id = mock.add_circuit_type("Internet");
    CircuitFixture {
        mock,
        provider_id,
        type_id,
    }
}

/// Minimal circuit record: only the required fields
pub fn circuit_record(cid: &str, provider_id: u64, type_id: u64) -> ResourceData {
    ResourceData::from_values([
        ("cid", json!(cid)),
        ("status", json!("active")),
        ("provider_id", json!(provider_id)),
        ("type_id", json!(type_id)),
    ])
}

/// Circuit as NetBox would return it, with no optional fields set
pub fn create_test_circuit(id: u64, cid: &str, provider_id: u64, type_id: u64) -> Circuit {
    Circuit {
        id,
        url: format!("{}/api/circuits/circuits/{}/", TEST_NETBOX_URL, id),
        display: cid.to_string(),
        cid: cid.to_string(),
        provider: Some(NestedProvider {
            id: provider_id,
            url: String::new(),
            display: "Acme Transit".to_string(),
            name: "Acme Transit".to_string(),
            slug: "acme-transit".to_string(),
        }),
        circuit_type: Some(NestedCircuitType {
            id: type_id,
            url: String::new(),
            display: "Internet".to_string(),
            name: "Internet".to_string(),
            slug: "internet".to_string(),
        }),
        status: ChoiceValue {
            value: "active".to_string(),
            label: "Active".to_string(),
        },
        tenant: None,
        install_date: None,
        termination_date: None,
        commit_rate: None,
        description: String::new(),
        comments: String::new(),
        tags: vec![],
        custom_fields: Default::default(),
        created: None,
        last_updated: None,
    }
}

/// Minimal provider network record
pub fn provider_network_record(name: &str, provider_id: u64) -> ResourceData {
    ResourceData::from_values([("name", json!(name)), ("provider_id", json!(provider_id))])
}

/// Minimal device bay record
pub fn device_bay_record(name: &str, device_id: u64) -> ResourceData {
    ResourceData::from_values([("name", json!(name)), ("device_id", json!(device_id))])
}
