//! NetBox client errors

use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// HTTP request/response error (connection refused, timeout, TLS, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox API returned a non-success status
    #[error("NetBox API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by NetBox
        status: u16,
        /// Request line and response body
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid token, expired, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (e.g., malformed base URL or header)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NetBoxError {
    /// HTTP status code carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetBoxError::Api { status, .. } => Some(*status),
            NetBoxError::NotFound(_) => Some(404),
            NetBoxError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server reported that the addressed object does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_reports_404() {
        let err = NetBoxError::NotFound("GET /api/circuits/circuits/7/".to_string());
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_error_keeps_status() {
        let err = NetBoxError::Api {
            status: 400,
            message: "POST /api/dcim/device-bays/ failed".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("(400)"));
    }

    #[test]
    fn test_local_errors_have_no_status() {
        let err = NetBoxError::InvalidRequest("bad header".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
