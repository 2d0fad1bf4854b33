//! Fluent blocking HTTP client for JSON request/response round trips
//!
//! This crate wraps `reqwest`'s blocking client behind a small fluent
//! builder: configure a URL, body parameters, method, headers, and timeout
//! through chained setters, then execute a single synchronous call whose
//! JSON response body is decoded into the caller's type.
//!
//! Requests default to `POST` with a `Content-Type: application/json`
//! header and a 5 second timeout. The HTTP status code is not inspected by
//! [`HttpClient::execute`]; use [`HttpClient::execute_raw`] when it matters.
//!
//! # Example
//!
//! ```no_run
//! use jsonreq::{HttpClient, RequestOptions, Response};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ApiResponse {
//!     message: String,
//! }
//!
//! fn example() -> Response<ApiResponse> {
//!     let client = HttpClient::new();
//!     client.execute(
//!         RequestOptions::new()
//!             .url("https://api.example.com/data")
//!             .params(&serde_json::json!({ "id": 1 })),
//!     )
//! }
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::{execute, HttpClient, HttpClientBuilder};
pub use error::HttpError;
pub use request::{RequestOptions, DEFAULT_TIMEOUT};
pub use response::{RawResponse, Response};
