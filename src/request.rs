//! Fluent request options builder

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::error::HttpError;

/// Timeout applied when none is configured (or a zero duration is set)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fluent builder holding the configuration for a single request
///
/// Setters store their value verbatim and return `self` for chaining; no
/// validation happens until [`HttpClient::execute`](crate::HttpClient::execute)
/// consumes the options. Defaults (method `POST`, 5 second timeout) are
/// resolved at execute time, so an unset field can still be overridden by a
/// later chained call.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub(crate) url: String,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) error: Option<HttpError>,
    pub(crate) method: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create an empty set of request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination URL, passed to the transport verbatim
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request body from any serializable value
    ///
    /// The value is encoded as JSON immediately. An encoding failure is
    /// stashed and returned by execute before any network activity.
    pub fn params<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        match serde_json::to_vec(params) {
            Ok(body) => {
                self.body = Some(body);
                self.error = None;
            }
            Err(e) => self.error = Some(HttpError::from(e)),
        }
        self
    }

    /// Set the HTTP method; an empty value falls back to `POST`
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Merge a header mapping into the request
    ///
    /// Each entry overwrites any default of the same name, including the
    /// default `Content-Type: application/json`.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Add a single header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request timeout; a zero duration falls back to the default
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn effective_method(&self) -> &str {
        if self.method.is_empty() {
            "POST"
        } else {
            &self.method
        }
    }

    pub(crate) fn effective_timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_method_defaults_to_post() {
        let options = RequestOptions::new().url("http://localhost");
        assert_eq!(options.effective_method(), "POST");
    }

    #[test]
    fn test_effective_method_empty_string_defaults_to_post() {
        let options = RequestOptions::new().method("");
        assert_eq!(options.effective_method(), "POST");
    }

    #[test]
    fn test_effective_method_uses_configured_value() {
        let options = RequestOptions::new().method("GET");
        assert_eq!(options.effective_method(), "GET");
    }

    #[test]
    fn test_effective_timeout_defaults_to_five_seconds() {
        let options = RequestOptions::new();
        assert_eq!(options.effective_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_effective_timeout_zero_defaults_to_five_seconds() {
        let options = RequestOptions::new().timeout(Duration::ZERO);
        assert_eq!(options.effective_timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_effective_timeout_uses_configured_value() {
        let options = RequestOptions::new().timeout(Duration::from_millis(50));
        assert_eq!(options.effective_timeout(), Duration::from_millis(50));
    }

    #[test]
    fn test_params_encodes_body_as_json() {
        let options = RequestOptions::new().params(&serde_json::json!({ "a": 1 }));
        let body = options.body.expect("Body should be set");
        let expected =
            serde_json::to_vec(&serde_json::json!({ "a": 1 })).expect("Encoding should succeed");
        assert_eq!(body, expected);
        assert!(options.error.is_none());
    }

    #[test]
    fn test_params_absent_means_no_body() {
        let options = RequestOptions::new().url("http://localhost");
        assert!(options.body.is_none());
    }

    #[test]
    fn test_params_stashes_serialization_error() {
        // Non-string map keys cannot be represented in JSON.
        let mut bad = HashMap::new();
        bad.insert(vec![1u8, 2, 3], 1);

        let options = RequestOptions::new().params(&bad);
        assert!(options.body.is_none());
        assert!(matches!(
            options.error,
            Some(HttpError::Serialization(_))
        ));
    }

    #[test]
    fn test_headers_merge_and_overwrite() {
        let mut first = HashMap::new();
        first.insert("X-One".to_string(), "1".to_string());
        first.insert("X-Two".to_string(), "2".to_string());

        let mut second = HashMap::new();
        second.insert("X-Two".to_string(), "22".to_string());

        let options = RequestOptions::new().headers(first).headers(second);
        assert_eq!(options.headers.get("X-One").map(String::as_str), Some("1"));
        assert_eq!(options.headers.get("X-Two").map(String::as_str), Some("22"));
    }

    #[test]
    fn test_chained_configuration() {
        let options = RequestOptions::new()
            .url("http://localhost/api")
            .method("PUT")
            .header("Authorization", "Bearer token123")
            .timeout(Duration::from_secs(1))
            .params(&serde_json::json!({ "name": "test" }));

        assert_eq!(options.url, "http://localhost/api");
        assert_eq!(options.effective_method(), "PUT");
        assert_eq!(
            options.headers.get("Authorization").map(String::as_str),
            Some("Bearer token123")
        );
        assert_eq!(options.effective_timeout(), Duration::from_secs(1));
        assert!(options.body.is_some());
    }
}
