//! DCIM operations for MockNetBoxClient
//!
//! Handles device bays

use super::{MockNetBoxClient, lock};
use crate::error::NetBoxError;
use crate::models::*;

fn build_device_bay(client: &MockNetBoxClient, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
    let helpers = client.helpers();
    let device_name = lock(&client.devices).get(&data.device).cloned();
    let installed_device = data.installed_device.map(|did| {
        let name = lock(&client.devices).get(&did).cloned();
        helpers.create_nested_device(did, name)
    });
    let tags = helpers.resolve_tags(&lock(&client.tags), &data.tags)?;
    let now = Some(chrono::Utc::now().to_rfc3339());

    Ok(DeviceBay {
        id,
        url: format!("{}/api/dcim/device-bays/{}/", client.base_url, id),
        display: data.name.clone(),
        device: Some(helpers.create_nested_device(data.device, device_name)),
        name: data.name.clone(),
        label: data.label.clone(),
        description: data.description.clone(),
        installed_device,
        tags,
        custom_fields: data.custom_fields.clone().unwrap_or_default(),
        created: now.clone(),
        last_updated: now,
    })
}

pub async fn get_device_bay(client: &MockNetBoxClient, id: u64) -> Result<DeviceBay, NetBoxError> {
    client.record("get_device_bay")?;
    lock(&client.device_bays)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("Device bay {} not found", id)))
}

pub async fn create_device_bay(client: &MockNetBoxClient, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
    client.record("create_device_bay")?;
    let id = client.next_id();
    let bay = build_device_bay(client, id, data)?;
    lock(&client.device_bays).insert(id, bay.clone());
    Ok(bay)
}

pub async fn update_device_bay(client: &MockNetBoxClient, id: u64, data: &WritableDeviceBay) -> Result<DeviceBay, NetBoxError> {
    client.record("update_device_bay")?;
    let (created, custom_fields) = lock(&client.device_bays)
        .get(&id)
        .map(|b| (b.created.clone(), b.custom_fields.clone()))
        .ok_or_else(|| NetBoxError::NotFound(format!("Device bay {} not found", id)))?;
    let mut bay = build_device_bay(client, id, data)?;
    bay.created = created;
    if data.custom_fields.is_none() {
        bay.custom_fields = custom_fields;
    }
    lock(&client.device_bays).insert(id, bay.clone());
    Ok(bay)
}

pub async fn delete_device_bay(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.record("delete_device_bay")?;
    lock(&client.device_bays)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("Device bay {} not found", id)))
}

pub async fn query_device_bays(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<DeviceBay>, NetBoxError> {
    client.record("query_device_bays")?;
    let bays = lock(&client.device_bays);
    let mut results: Vec<DeviceBay> = bays
        .values()
        .filter(|b| {
            filters.iter().all(|(k, v)| match *k {
                "name" => b.name == *v,
                "device_id" => b.device.as_ref().map(|d| d.id.to_string()).as_deref() == Some(*v),
                _ => true,
            })
        })
        .cloned()
        .collect();
    results.sort_by_key(|b| b.id);
    Ok(results)
}
