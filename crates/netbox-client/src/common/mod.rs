//! Common utilities for NetBox API client
//!
//! Provides shared functionality used across all API modules.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Map a non-success response into the error taxonomy.
    ///
    /// 404 becomes `NotFound`, 401/403 become `Authentication`, everything else `Api`.
    async fn error_for_status(method: &str, path: &str, response: Response) -> NetBoxError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => {
                NetBoxError::NotFound(format!("{} {} - {}", method, path, body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                NetBoxError::Authentication(format!("{} {}: {} - {}", method, path, status, body))
            }
            _ => NetBoxError::Api {
                status: status.as_u16(),
                message: format!("{} {} failed: {}", method, path, body),
            },
        }
    }

    /// Decode a JSON body, keeping a slice of the raw text for diagnostics
    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, NetBoxError> {
        let status = response.status().as_u16();
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| NetBoxError::Api {
            status,
            message: format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ),
        })
    }

    /// Send one request and turn any non-success status into an error
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, NetBoxError> {
        let url = self.build_url(path);
        match body {
            Some(body) => debug!("{} {} with body: {}", method, url, body),
            None => debug!("{} {}", method, url),
        }

        let mut request = self.client
            .request(method.clone(), &url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(NetBoxError::Http)?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(method.as_str(), path, response).await);
        }
        Ok(response)
    }

    /// Fetch all pages of a paginated response, following `next` links
    pub async fn fetch_all_pages<T: for<'de> Deserialize<'de>>(
        &self,
        mut url: String,
    ) -> Result<Vec<T>, NetBoxError> {
        let mut all_results = Vec::new();

        loop {
            let response = self.send(Method::GET, &url, None).await?;
            let page: PaginatedResponse<T> = Self::decode(response).await?;
            all_results.extend(page.results);

            match page.next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(all_results)
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, NetBoxError> {
        let response = self.send(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, NetBoxError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn patch<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, NetBoxError> {
        let response = self.send(Method::PATCH, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// DELETE; NetBox answers 204 with no body
    pub async fn delete(&self, path: &str) -> Result<(), NetBoxError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        if filters.is_empty() {
            String::new()
        } else {
            filters
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> HttpClient {
        HttpClient::new(Client::new(), "http://netbox:8080/".to_string(), "abc".to_string())
    }

    #[test]
    fn test_base_url_is_trimmed() {
        assert_eq!(http().base_url(), "http://netbox:8080");
    }

    #[test]
    fn test_build_url_keeps_absolute_next_links() {
        let http = http();
        assert_eq!(
            http.build_url("/api/circuits/circuits/"),
            "http://netbox:8080/api/circuits/circuits/"
        );
        assert_eq!(
            http.build_url("https://other/api/circuits/circuits/?offset=50"),
            "https://other/api/circuits/circuits/?offset=50"
        );
    }

    #[test]
    fn test_build_query_string_encodes_values() {
        let qs = http().build_query_string(&[("name", "core switch"), ("limit", "2")]);
        assert_eq!(qs, "name=core%20switch&limit=2");
        assert_eq!(http().build_query_string(&[]), "");
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        assert_eq!(http().auth_header(), "Token abc");
    }
}
