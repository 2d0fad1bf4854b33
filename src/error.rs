//! HTTP error types

use thiserror::Error;

/// Errors that can occur while building, sending, or decoding a request
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request parameters could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Response body was not valid JSON or did not match the target shape
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Request could not be constructed
    #[error("Request build error: {0}")]
    Build(String),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_decode() {
            HttpError::Deserialization(err.to_string())
        } else if err.is_builder() {
            HttpError::Build(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}
