//! Circuits operations for MockNetBoxClient
//!
//! Handles circuits and provider networks

use super::{MockNetBoxClient, lock};
use crate::error::NetBoxError;
use crate::models::*;

fn now() -> Option<String> {
    Some(chrono::Utc::now().to_rfc3339())
}

fn build_circuit(client: &MockNetBoxClient, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
    let helpers = client.helpers();
    let provider_name = lock(&client.providers).get(&data.provider).cloned();
    let type_name = lock(&client.circuit_types).get(&data.circuit_type).cloned();
    let tenant = data.tenant.map(|tid| {
        let name = lock(&client.tenants).get(&tid).cloned();
        helpers.create_nested_tenant(tid, name)
    });
    let tags = helpers.resolve_tags(&lock(&client.tags), &data.tags)?;

    Ok(Circuit {
        id,
        url: format!("{}/api/circuits/circuits/{}/", client.base_url, id),
        display: data.cid.clone(),
        cid: data.cid.clone(),
        provider: Some(helpers.create_nested_provider(data.provider, provider_name)),
        circuit_type: Some(helpers.create_nested_circuit_type(data.circuit_type, type_name)),
        status: ChoiceValue {
            value: data.status.clone(),
            label: data.status.clone(),
        },
        tenant,
        install_date: data.install_date,
        termination_date: data.termination_date,
        commit_rate: data.commit_rate,
        description: data.description.clone(),
        comments: data.comments.clone(),
        tags,
        custom_fields: data.custom_fields.clone().unwrap_or_default(),
        created: now(),
        last_updated: now(),
    })
}

pub async fn get_circuit(client: &MockNetBoxClient, id: u64) -> Result<Circuit, NetBoxError> {
    client.record("get_circuit")?;
    lock(&client.circuits)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("Circuit {} not found", id)))
}

pub async fn create_circuit(client: &MockNetBoxClient, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
    client.record("create_circuit")?;
    let id = client.next_id();
    let circuit = build_circuit(client, id, data)?;
    lock(&client.circuits).insert(id, circuit.clone());
    Ok(circuit)
}

pub async fn update_circuit(client: &MockNetBoxClient, id: u64, data: &WritableCircuit) -> Result<Circuit, NetBoxError> {
    client.record("update_circuit")?;
    let (created, custom_fields) = lock(&client.circuits)
        .get(&id)
        .map(|c| (c.created.clone(), c.custom_fields.clone()))
        .ok_or_else(|| NetBoxError::NotFound(format!("Circuit {} not found", id)))?;
    let mut circuit = build_circuit(client, id, data)?;
    circuit.created = created;
    // PATCH leaves omitted custom fields untouched
    if data.custom_fields.is_none() {
        circuit.custom_fields = custom_fields;
    }
    lock(&client.circuits).insert(id, circuit.clone());
    Ok(circuit)
}

pub async fn delete_circuit(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.record("delete_circuit")?;
    lock(&client.circuits)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("Circuit {} not found", id)))
}

pub async fn query_circuits(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Circuit>, NetBoxError> {
    client.record("query_circuits")?;
    let circuits = lock(&client.circuits);
    let mut results: Vec<Circuit> = circuits
        .values()
        .filter(|c| filters.iter().all(|(k, v)| *k != "cid" || c.cid == *v))
        .cloned()
        .collect();
    results.sort_by_key(|c| c.id);
    Ok(results)
}

fn build_provider_network(
    client: &MockNetBoxClient,
    id: u64,
    data: &WritableProviderNetwork,
) -> Result<ProviderNetwork, NetBoxError> {
    let helpers = client.helpers();
    let provider_name = lock(&client.providers).get(&data.provider).cloned();
    let tags = helpers.resolve_tags(&lock(&client.tags), &data.tags)?;

    Ok(ProviderNetwork {
        id,
        url: format!("{}/api/circuits/provider-networks/{}/", client.base_url, id),
        display: data.name.clone(),
        provider: Some(helpers.create_nested_provider(data.provider, provider_name)),
        name: data.name.clone(),
        service_id: data.service_id.clone(),
        description: data.description.clone(),
        comments: data.comments.clone(),
        tags,
        custom_fields: data.custom_fields.clone().unwrap_or_default(),
        created: now(),
        last_updated: now(),
    })
}

pub async fn get_provider_network(client: &MockNetBoxClient, id: u64) -> Result<ProviderNetwork, NetBoxError> {
    client.record("get_provider_network")?;
    lock(&client.provider_networks)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("Provider network {} not found", id)))
}

pub async fn create_provider_network(client: &MockNetBoxClient, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
    client.record("create_provider_network")?;
    let id = client.next_id();
    let network = build_provider_network(client, id, data)?;
    lock(&client.provider_networks).insert(id, network.clone());
    Ok(network)
}

pub async fn update_provider_network(client: &MockNetBoxClient, id: u64, data: &WritableProviderNetwork) -> Result<ProviderNetwork, NetBoxError> {
    client.record("update_provider_network")?;
    let (created, custom_fields) = lock(&client.provider_networks)
        .get(&id)
        .map(|n| (n.created.clone(), n.custom_fields.clone()))
        .ok_or_else(|| NetBoxError::NotFound(format!("Provider network {} not found", id)))?;
    let mut network = build_provider_network(client, id, data)?;
    network.created = created;
    if data.custom_fields.is_none() {
        network.custom_fields = custom_fields;
    }
    lock(&client.provider_networks).insert(id, network.clone());
    Ok(network)
}

pub async fn delete_provider_network(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.record("delete_provider_network")?;
    lock(&client.provider_networks)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("Provider network {} not found", id)))
}

pub async fn query_provider_networks(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<ProviderNetwork>, NetBoxError> {
    client.record("query_provider_networks")?;
    let networks = lock(&client.provider_networks);
    let mut results: Vec<ProviderNetwork> = networks
        .values()
        .filter(|n| filters.iter().all(|(k, v)| *k != "name" || n.name == *v))
        .cloned()
        .collect();
    results.sort_by_key(|n| n.id);
    Ok(results)
}
