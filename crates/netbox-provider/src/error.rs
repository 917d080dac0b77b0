//! Provider-specific error types.
//!
//! Local failures (configuration, validation, date parsing, identifiers) are raised before
//! any request reaches NetBox. Remote failures are carried through unchanged.

use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur in the NetBox resource provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// NetBox API error, propagated as the client reported it
    #[error(transparent)]
    NetBox(#[from] NetBoxError),

    /// A required field is absent from the record
    #[error("missing required field `{0}`")]
    MissingRequired(String),

    /// A field holds a value its schema does not allow
    #[error("invalid value for `{field}`: {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// What is wrong with the value
        message: String,
    },

    /// A field is not declared by the resource schema
    #[error("unsupported field `{0}`")]
    UnknownAttribute(String),

    /// Date text that is not a `YYYY-MM-DD` calendar date
    #[error("invalid date for `{field}`: {value:?}: {source}")]
    InvalidDate {
        /// Field name
        field: String,
        /// The text that failed to parse
        value: String,
        /// Parser error
        #[source]
        source: chrono::ParseError,
    },

    /// Record ID that is not a NetBox integer ID
    #[error("invalid resource ID {0:?}: expected a NetBox integer ID")]
    InvalidId(String),

    /// A tag name that does not map to exactly one NetBox tag
    #[error("could not map tag `{tag}` to a unique tag ID ({matches} matches)")]
    TagNotUnique {
        /// Tag name from the record
        tag: String,
        /// Number of tags NetBox returned for the name (capped at 2)
        matches: usize,
    },

    /// Resource type name that is not registered with the provider
    #[error("unknown resource type `{0}`")]
    UnknownResource(String),

    /// Import addressed an object that does not exist
    #[error("cannot import non-existent remote object: {resource} {id}")]
    ImportNotFound {
        /// Resource type name
        resource: String,
        /// ID supplied to import
        id: String,
    },

    /// Invalid provider configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProviderError {
    /// Whether the error was raised locally, before any remote call.
    pub fn is_local(&self) -> bool {
        !matches!(self, ProviderError::NetBox(_) | ProviderError::ImportNotFound { .. })
    }
}
