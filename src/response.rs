//! HTTP response types

use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

/// Raw HTTP response with status code and body access
#[derive(Debug)]
pub struct RawResponse {
    status: u16,
    inner: reqwest::blocking::Response,
}

impl RawResponse {
    pub(crate) fn new(response: reqwest::blocking::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            inner: response,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Get the response body as text
    pub fn text(self) -> Response<String> {
        self.inner.text().map_err(HttpError::from)
    }

    /// Get the response body as JSON
    pub fn json<T: DeserializeOwned>(self) -> Response<T> {
        self.inner.json().map_err(HttpError::from)
    }

    /// Get the response body as bytes
    pub fn bytes(self) -> Response<Vec<u8>> {
        self.inner
            .bytes()
            .map(|b| b.to_vec())
            .map_err(HttpError::from)
    }
}
