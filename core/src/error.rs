//! Error types for the project resource.
//!
//! # Design
//! Serialization and transport failures are passed through with their
//! original text. A non-200 read or any delete status is not an error at
//! this layer, so there is no `NotFound` or status variant.

use thiserror::Error;

/// Errors returned by the resource adapter and the HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client failed to produce a response.
    #[error("{0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error(transparent)]
    Serialization(serde_json::Error),

    /// The response body could not be deserialized.
    #[error(transparent)]
    Deserialization(serde_json::Error),

    /// The record was rejected before any request was sent.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Problems with the configuration handed over by the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid resource state: {0}")]
    InvalidState(String),

    #[error("invalid project identifier `{0}`, expected `owner/key`")]
    InvalidIdentifier(String),

    #[error("field `{0}` cannot be changed in place")]
    ImmutableField(&'static str),

    #[error("unknown resource type `{0}`")]
    UnknownResourceType(String),
}
