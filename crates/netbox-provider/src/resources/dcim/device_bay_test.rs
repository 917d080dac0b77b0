//! Unit tests for the netbox_device_bay adapter

#[cfg(test)]
mod tests {
    use super::super::device_bay::DeviceBayResource;
    use crate::data::ResourceData;
    use crate::error::ProviderError;
    use crate::resource::Resource;
    use crate::test_utils::*;
    use netbox_client::MockNetBoxClient;
    use serde_json::json;

    fn setup() -> (MockNetBoxClient, u64) {
        let mock = MockNetBoxClient::new(TEST_NETBOX_URL);
        let device_id = mock.add_device("chassis-01");
        (mock, device_id)
    }

    #[tokio::test]
    async fn test_create_empty_bay() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 1", device_id);

        DeviceBayResource.create(&mock, &mut data).await.unwrap();

        assert!(data.has_id());
        assert_eq!(data.get("device_id"), Some(&json!(device_id)));
        assert_eq!(data.get("label"), Some(&json!("")));
        assert_eq!(data.values()["installed_device"], json!(null));
        assert_eq!(mock.calls(), vec!["create_device_bay", "get_device_bay"]);
    }

    #[tokio::test]
    async fn test_install_and_remove_child_device() {
        let (mock, device_id) = setup();
        let blade = mock.add_device("blade-01");
        let mut data = device_bay_record("Bay 1", device_id);
        data.set("installed_device", blade);
        data.set("label", "front");

        DeviceBayResource.create(&mock, &mut data).await.unwrap();
        assert_eq!(data.get("installed_device"), Some(&json!(blade)));
        assert_eq!(data.get("label"), Some(&json!("front")));

        data.remove("installed_device");
        DeviceBayResource.update(&mock, &mut data).await.unwrap();

        let stored = mock.device_bay(data.id().parse().unwrap()).unwrap();
        assert!(stored.installed_device.is_none());
        assert_eq!(data.values()["installed_device"], json!(null));
    }

    #[tokio::test]
    async fn test_custom_fields_pass_through() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 2", device_id);
        data.set("custom_fields", json!({"slot_power": 250, "asset": "A-1"}));

        DeviceBayResource.create(&mock, &mut data).await.unwrap();

        let stored = mock.device_bay(data.id().parse().unwrap()).unwrap();
        assert_eq!(stored.custom_fields.get("slot_power"), Some(&json!(250)));
        assert_eq!(data.get("custom_fields"), Some(&json!({"slot_power": 250, "asset": "A-1"})));
    }

    #[tokio::test]
    async fn test_update_without_custom_fields_keeps_server_values() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 4", device_id);
        data.set("custom_fields", json!({"asset": "A-9"}));
        DeviceBayResource.create(&mock, &mut data).await.unwrap();

        data.remove("custom_fields");
        data.set("label", "rear");
        DeviceBayResource.update(&mock, &mut data).await.unwrap();

        let stored = mock.device_bay(data.id().parse().unwrap()).unwrap();
        assert_eq!(stored.custom_fields.get("asset"), Some(&json!("A-9")));
        assert_eq!(data.get("custom_fields"), Some(&json!({"asset": "A-9"})));

        data.set("custom_fields", json!({"asset": "B-1"}));
        DeviceBayResource.update(&mock, &mut data).await.unwrap();
        assert_eq!(data.get("custom_fields"), Some(&json!({"asset": "B-1"})));
    }

    #[tokio::test]
    async fn test_import_with_leading_zeros_uses_server_id() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 5", device_id);
        DeviceBayResource.create(&mock, &mut data).await.unwrap();

        let imported = DeviceBayResource.import(&mock, &format!("00{}", data.id())).await.unwrap();
        assert_eq!(imported.id(), data.id());
    }

    #[tokio::test]
    async fn test_missing_device_makes_no_call() {
        let (mock, _) = setup();
        let mut data = ResourceData::from_values([("name", json!("Bay 1"))]);

        let err = DeviceBayResource.create(&mock, &mut data).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingRequired(ref f) if f == "device_id"));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_server_rejection_is_propagated() {
        let (mock, device_id) = setup();
        mock.fail_with("create_device_bay", 400);
        let mut data = device_bay_record("Bay 1", device_id);

        let err = DeviceBayResource.create(&mock, &mut data).await.unwrap_err();
        assert!(matches!(err, ProviderError::NetBox(ref e) if e.status() == Some(400)));
        assert!(!data.has_id());
    }

    #[tokio::test]
    async fn test_delete_twice_is_ok() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 1", device_id);
        DeviceBayResource.create(&mock, &mut data).await.unwrap();
        let id = data.id().to_string();

        DeviceBayResource.delete(&mock, &mut data).await.unwrap();

        let mut again = ResourceData::with_id(id);
        DeviceBayResource.delete(&mock, &mut again).await.unwrap();
        assert!(!again.has_id());
    }

    #[tokio::test]
    async fn test_import_then_read_is_stable() {
        let (mock, device_id) = setup();
        let mut data = device_bay_record("Bay 3", device_id);
        DeviceBayResource.create(&mock, &mut data).await.unwrap();

        let imported = DeviceBayResource.import(&mock, data.id()).await.unwrap();
        assert_eq!(imported, data);
    }

    #[tokio::test]
    async fn test_sweep_ignores_other_names() {
        let (mock, device_id) = setup();
        for name in ["test-bay-1", "test-bay-2", "Bay 9"] {
            let mut data = device_bay_record(name, device_id);
            DeviceBayResource.create(&mock, &mut data).await.unwrap();
        }

        assert_eq!(DeviceBayResource.sweep(&mock, "test-").await.unwrap(), 2);
        assert_eq!(DeviceBayResource.sweep(&mock, "test-").await.unwrap(), 0);
    }
}
