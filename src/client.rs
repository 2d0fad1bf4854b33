//! HTTP client wrapper

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::request::RequestOptions;
use crate::response::{RawResponse, Response};

/// Blocking HTTP client wrapper
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from a reqwest::blocking::Client
    pub fn from_reqwest(client: reqwest::blocking::Client) -> Self {
        Self { inner: client }
    }

    /// Execute the configured request and decode the JSON response into R
    ///
    /// Blocks the calling thread until a response arrives or the effective
    /// timeout elapses. The HTTP status code is never inspected: any
    /// response whose body decodes into R is success, including 4xx and
    /// 5xx. Use [`HttpClient::execute_raw`] when the status code matters.
    pub fn execute<R>(&self, options: RequestOptions) -> Response<R>
    where
        R: DeserializeOwned,
    {
        let response = self.dispatch(options)?;
        response.json().map_err(HttpError::from)
    }

    /// Execute the configured request and return the raw response
    pub fn execute_raw(&self, options: RequestOptions) -> Response<RawResponse> {
        Ok(RawResponse::new(self.dispatch(options)?))
    }

    fn dispatch(&self, mut options: RequestOptions) -> Response<reqwest::blocking::Response> {
        // A params encoding failure aborts before any network activity.
        if let Some(err) = options.error.take() {
            return Err(err);
        }

        let method = Method::from_bytes(options.effective_method().as_bytes())
            .map_err(|e| HttpError::Build(e.to_string()))?;
        let timeout = options.effective_timeout();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (key, value) in &options.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HttpError::Build(e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| HttpError::Build(e.to_string()))?;
            headers.insert(name, value);
        }

        tracing::debug!(method = %method, url = %options.url, "sending request");

        let mut request = self
            .inner
            .request(method, options.url.as_str())
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = options.body.take() {
            request = request.body(body);
        }

        let response = request.send().map_err(HttpError::from)?;
        tracing::trace!(status = %response.status(), "received response");
        Ok(response)
    }
}

/// HTTP client builder for configuring proxy and TLS settings
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
    proxy: Option<url::Url>,
}

impl HttpClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: url::Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let mut builder = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(proxy_url) = self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| HttpError::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(HttpError::from)?;
        Ok(HttpClient { inner: client })
    }
}

/// Convenience function executing a request with a fresh default client
pub fn execute<R: DeserializeOwned>(options: RequestOptions) -> Response<R> {
    HttpClient::new().execute(options)
}
