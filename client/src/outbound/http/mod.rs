//! HTTP transport port and its reqwest implementation.
//!
//! The catalogue data source issues parameterised GET requests through
//! [`HttpTransport`] and receives raw response bodies. Credentials, base URL,
//! and timeouts belong to the transport, not to its callers.

mod reqwest_transport;

use async_trait::async_trait;

use crate::domain::ports::define_port_error;

pub use reqwest_transport::{ReqwestTransport, TransportSettings};

/// A GET request relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Path below the base URL, such as `/movie/popular`.
    pub endpoint: String,
    /// Query parameters appended after the credentials.
    pub query: Vec<(String, String)>,
}

impl TransportRequest {
    /// Start a request for `endpoint` with no query parameters.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            query: Vec::new(),
        }
    }

    /// Append one query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

define_port_error! {
    /// Failures raised by HTTP transports.
    pub enum TransportError {
        /// The connection failed before a response arrived.
        Transport { message: String } =>
            "transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "request timed out: {message}",
        /// The server rate-limited the request.
        RateLimited { message: String } =>
            "rate limited: {message}",
        /// The server answered with a non-success status.
        Status { status: u16, message: String } =>
            "HTTP error {status}: {message}",
        /// The request could not be built.
        InvalidRequest { message: String } =>
            "invalid request: {message}",
    }
}

/// Port for issuing GET requests and returning raw response bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and return the body of a successful response.
    async fn get(&self, request: &TransportRequest) -> Result<Vec<u8>, TransportError>;
}
