//! Query utilities for NetBox API
//!
//! Provides helpers for building queries and handling pagination.

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::Deserialize;

/// Query resources with optional filtering and pagination
///
/// `endpoint` is relative to `/api/`, e.g. `circuits/circuits`.
pub async fn query_resources<T: for<'de> Deserialize<'de>>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
    fetch_all: bool,
) -> Result<Vec<T>, NetBoxError> {
    let mut url = format!("/api/{}/", endpoint);

    if !filters.is_empty() {
        let query_string = http.build_query_string(filters);
        url = format!("{}?{}", url, query_string);
    }

    if fetch_all {
        http.fetch_all_pages(http.build_url(&url)).await
    } else {
        let response: PaginatedResponse<T> = http.get(&url).await?;
        Ok(response.results)
    }
}

/// Path of a single object under an endpoint, e.g. `/api/dcim/device-bays/7/`
pub fn object_path(endpoint: &str, id: u64) -> String {
    format!("/api/{}/{}/", endpoint, id)
}

/// Path of an endpoint's collection, e.g. `/api/dcim/device-bays/`
pub fn collection_path(endpoint: &str) -> String {
    format!("/api/{}/", endpoint)
}
