//! Integration tests for the NetBox HTTP client using wiremock
//!
//! These tests verify the client against mocked NetBox endpoints,
//! covering status-code mapping, request bodies and pagination.

use netbox_client::{NetBoxClient, NetBoxError, TagReference, WritableCircuit, WritableDeviceBay};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NetBoxClient {
    NetBoxClient::new(server.uri(), "test-token".to_string()).expect("client should build")
}

fn circuit_payload(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("http://netbox/api/circuits/circuits/{}/", id),
        "display": "CKT-1",
        "cid": "CKT-1",
        "provider": {"id": 1, "name": "Acme", "slug": "acme"},
        "type": {"id": 2, "name": "Transit", "slug": "transit"},
        "status": {"value": "active", "label": "Active"},
        "tenant": null,
        "install_date": null,
        "termination_date": null,
        "commit_rate": null,
        "description": "",
        "comments": "",
        "tags": [],
        "custom_fields": {}
    })
}

mod status_mapping {
    use super::*;

    /// Successful GET sends the token header and parses the circuit
    #[tokio::test]
    async fn test_get_circuit_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/circuits/circuits/7/"))
            .and(header("Authorization", "Token test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(circuit_payload(7)))
            .mount(&server)
            .await;

        let circuit = client_for(&server).get_circuit(7).await.expect("GET should succeed");
        assert_eq!(circuit.id, 7);
        assert_eq!(circuit.status.value, "active");
    }

    /// 404 on GET surfaces as NotFound
    #[tokio::test]
    async fn test_get_missing_circuit_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/circuits/circuits/99/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let err = client_for(&server).get_circuit(99).await.unwrap_err();
        assert!(matches!(err, NetBoxError::NotFound(_)), "got {:?}", err);
    }

    /// 404 on PATCH also surfaces as NotFound so callers can decide what it means
    #[tokio::test]
    async fn test_patch_missing_device_bay_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/dcim/device-bays/5/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let data = WritableDeviceBay {
            device: 1,
            name: "Bay 1".to_string(),
            label: String::new(),
            description: String::new(),
            installed_device: None,
            tags: vec![],
            custom_fields: None,
        };
        let err = client_for(&server).update_device_bay(5, &data).await.unwrap_err();
        assert!(err.is_not_found());
    }

    /// 403 maps to Authentication
    #[tokio::test]
    async fn test_forbidden_is_authentication_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/status/"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})))
            .mount(&server)
            .await;

        let err = client_for(&server).validate_token().await.unwrap_err();
        assert!(matches!(err, NetBoxError::Authentication(_)), "got {:?}", err);
    }

    /// 400 keeps its status code and the server's message
    #[tokio::test]
    async fn test_validation_error_keeps_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/circuits/provider-networks/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"name": ["This field is required."]})))
            .mount(&server)
            .await;

        let data = netbox_client::WritableProviderNetwork {
            provider: 1,
            name: String::new(),
            service_id: String::new(),
            description: String::new(),
            comments: String::new(),
            tags: vec![],
            custom_fields: None,
        };
        let err = client_for(&server).create_provider_network(&data).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("This field is required."));
    }

    /// DELETE answering 204 is success
    #[tokio::test]
    async fn test_delete_no_content_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/circuits/circuits/3/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        client_for(&server).delete_circuit(3).await.expect("delete should succeed");
    }
}

mod request_bodies {
    use super::*;

    /// Create posts nulls for cleared nullable fields and tag references by name/slug
    #[tokio::test]
    async fn test_create_circuit_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/circuits/circuits/"))
            .and(body_json(json!({
                "cid": "CKT-1",
                "provider": 1,
                "type": 2,
                "status": "active",
                "tenant": null,
                "install_date": "2024-01-15",
                "termination_date": null,
                "commit_rate": null,
                "description": "",
                "comments": "",
                "tags": [{"name": "core", "slug": "core"}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(circuit_payload(11)))
            .mount(&server)
            .await;

        let data = WritableCircuit {
            cid: "CKT-1".to_string(),
            provider: 1,
            circuit_type: 2,
            status: "active".to_string(),
            tenant: None,
            install_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
            termination_date: None,
            commit_rate: None,
            description: String::new(),
            comments: String::new(),
            tags: vec![TagReference { name: "core".to_string(), slug: "core".to_string() }],
            custom_fields: None,
        };

        let created = client_for(&server).create_circuit(&data).await.expect("create should succeed");
        assert_eq!(created.id, 11);
    }
}

mod pagination {
    use super::*;

    /// fetch_all follows `next` links until exhausted
    #[tokio::test]
    async fn test_query_tags_follows_next_links() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/extras/tags/"))
            .and(query_param("offset", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [{"id": 2, "name": "edge", "slug": "edge"}]
            })))
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/extras/tags/"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": format!("{}/api/extras/tags/?limit=1&offset=1", server.uri()),
                "previous": null,
                "results": [{"id": 1, "name": "core", "slug": "core"}]
            })))
            .mount(&server)
            .await;

        let tags = client_for(&server)
            .query_tags(&[("limit", "1")], true)
            .await
            .expect("query should succeed");

        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["core", "edge"]);
    }

    /// Without fetch_all only the first page is returned
    #[tokio::test]
    async fn test_query_tags_first_page_only() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/extras/tags/"))
            .and(query_param("name", "core"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{"id": 1, "name": "core", "slug": "core"}]
            })))
            .mount(&server)
            .await;

        let tags = client_for(&server)
            .query_tags(&[("name", "core")], false)
            .await
            .expect("query should succeed");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].slug, "core");
    }
}
