//! Transport trait for mocking
//!
//! Every resource client talks to the device through this trait. The concrete
//! `HttpTransport` implements it over reqwest, and tests use `MockTransport`.

use crate::error::BigIpError;
use reqwest::Method;

/// A fully assembled iControl REST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute path below the base URL, e.g. `/mgmt/tm/ltm/monitor/http`
    pub path: String,
    /// JSON body for `POST`/`PUT`
    pub body: Option<String>,
}

impl RestRequest {
    /// Create a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Trait for executing iControl REST requests
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Execute `request` and return the raw response body
    async fn execute(&self, request: RestRequest) -> Result<Vec<u8>, BigIpError>;
}
