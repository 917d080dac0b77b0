//! Provider configuration
//!
//! Loaded from an optional YAML file, then overridden by environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `NETBOX_SERVER_URL` | `server_url` |
//! | `NETBOX_API_TOKEN` | `api_token` |
//! | `NETBOX_ALLOW_INSECURE_HTTPS` | `allow_insecure_https` |
//! | `NETBOX_REQUEST_TIMEOUT` | `request_timeout` (seconds) |

use crate::error::ProviderError;
use netbox_client::{ClientOptions, NetBoxClient};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the NetBox API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// NetBox base URL, e.g. `https://netbox.example.com`
    pub server_url: String,
    pub api_token: String,
    pub allow_insecure_https: bool,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            api_token: String::new(),
            allow_insecure_https: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            headers: BTreeMap::new(),
        }
    }
}

impl ProviderConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProviderError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ProviderError::InvalidConfig(format!("failed to parse config: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        debug!("Loading provider config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ProviderError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Apply `NETBOX_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("NETBOX_SERVER_URL") {
            self.server_url = url;
        }
        if let Some(token) = lookup("NETBOX_API_TOKEN") {
            self.api_token = token;
        }
        if let Some(value) = lookup("NETBOX_ALLOW_INSECURE_HTTPS") {
            self.allow_insecure_https = parse_bool("NETBOX_ALLOW_INSECURE_HTTPS", &value)?;
        }
        if let Some(value) = lookup("NETBOX_REQUEST_TIMEOUT") {
            self.request_timeout = value.trim().parse().map_err(|_| {
                ProviderError::InvalidConfig(format!(
                    "NETBOX_REQUEST_TIMEOUT must be a whole number of seconds, got {:?}",
                    value
                ))
            })?;
        }
        Ok(self)
    }

    /// Load from an optional file, then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ProviderError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.apply_env(|name| std::env::var(name).ok())
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.server_url.is_empty() {
            return Err(ProviderError::InvalidConfig(
                "server_url is required (or set NETBOX_SERVER_URL)".to_string(),
            ));
        }
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ProviderError::InvalidConfig(format!(
                "server_url must start with http:// or https://, got {:?}",
                self.server_url
            )));
        }
        if self.api_token.is_empty() {
            return Err(ProviderError::InvalidConfig(
                "api_token is required (or set NETBOX_API_TOKEN)".to_string(),
            ));
        }
        if self.request_timeout == 0 {
            return Err(ProviderError::InvalidConfig(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.request_timeout),
            allow_insecure_https: self.allow_insecure_https,
            headers: self.headers.clone(),
        }
    }

    /// Validate the settings and build an HTTP client from them
    pub fn build_client(&self) -> Result<NetBoxClient, ProviderError> {
        self.validate()?;
        let url = self.server_url.trim_end_matches('/').to_string();
        Ok(NetBoxClient::with_options(
            url,
            self.api_token.clone(),
            self.client_options(),
        )?)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ProviderError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ProviderError::InvalidConfig(format!(
            "{} must be a boolean, got {:?}",
            name, value
        ))),
    }
}
