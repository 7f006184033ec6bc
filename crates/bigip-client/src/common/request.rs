//! Request builder for iControl REST paths
//!
//! Paths follow `/<prefix>/<category>/<manager>/<resource>[/<sub>][/<instance>][/stats]`,
//! for example `/mgmt/tm/ltm/monitor/http/~Common~http_monitor_1`.

use crate::common::context::RequestContext;
use crate::error::BigIpError;
use crate::transport::{RestRequest, Transport};
use reqwest::Method;
use std::fmt;
use std::sync::Arc;

/// Management API prefix
pub const BASE_RESOURCE: &str = "mgmt";
/// Traffic-management category
pub const TM_RESOURCE: &str = "tm";
/// Shared services category (authentication, etc.)
pub const SHARED_RESOURCE: &str = "shared";

/// Encode an object name or full path as an instance segment
///
/// `/Common/foo` and `Common/foo` both become `~Common~foo`; the result is
/// percent-encoded so that names containing spaces or reserved characters
/// survive the URL.
pub fn encode_instance(name: &str) -> String {
    let mut tilded = name.replace('/', "~");
    if name.contains('/') && !name.starts_with(['/', '~']) {
        tilded.insert(0, '~');
    }
    urlencoding::encode(&tilded).into_owned()
}

/// Shared handle to a transport
///
/// Cloning is cheap; every resource client holds one of these.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient").finish_non_exhaustive()
    }
}

impl RestClient {
    /// Wrap a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Start a `GET` request
    pub fn get(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self.transport.as_ref(), Method::GET)
    }

    /// Start a `POST` request
    pub fn post(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self.transport.as_ref(), Method::POST)
    }

    /// Start a `PUT` request
    pub fn put(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self.transport.as_ref(), Method::PUT)
    }

    /// Start a `DELETE` request
    pub fn delete(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self.transport.as_ref(), Method::DELETE)
    }
}

/// Chainable request builder, terminated by [`RequestBuilder::do_raw`]
pub struct RequestBuilder<'a> {
    transport: &'a dyn Transport,
    method: Method,
    prefix: Option<String>,
    category: Option<String>,
    manager: Option<String>,
    resource: Option<String>,
    sub_resource: Option<String>,
    instance: Option<String>,
    stats: bool,
    body: Option<String>,
}

impl fmt::Debug for RequestBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("path", &self.path())
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

fn literal(segment: &str) -> Option<String> {
    let trimmed = segment.trim_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl<'a> RequestBuilder<'a> {
    fn new(transport: &'a dyn Transport, method: Method) -> Self {
        Self {
            transport,
            method,
            prefix: None,
            category: None,
            manager: None,
            resource: None,
            sub_resource: None,
            instance: None,
            stats: false,
            body: None,
        }
    }

    /// API prefix, normally `mgmt`
    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = literal(prefix);
        self
    }

    /// Category, e.g. `tm` or `shared`
    #[must_use]
    pub fn resource_category(mut self, category: &str) -> Self {
        self.category = literal(category);
        self
    }

    /// Module, e.g. `ltm` or `sys`
    #[must_use]
    pub fn manager_name(mut self, manager: &str) -> Self {
        self.manager = literal(manager);
        self
    }

    /// Resource, e.g. `monitor` or `ntp`
    #[must_use]
    pub fn resource(mut self, resource: &str) -> Self {
        self.resource = literal(resource);
        self
    }

    /// Sub-resource below a shared parent, e.g. `http` below `monitor`
    #[must_use]
    pub fn sub_resource(mut self, sub_resource: &str) -> Self {
        self.sub_resource = literal(sub_resource);
        self
    }

    /// Object name or full path; encoded with [`encode_instance`]
    #[must_use]
    pub fn resource_instance(mut self, name: &str) -> Self {
        self.instance = (!name.is_empty()).then(|| encode_instance(name));
        self
    }

    /// Address the `stats` view of the collection, instance or singleton
    #[must_use]
    pub fn stats(mut self) -> Self {
        self.stats = true;
        self
    }

    /// JSON request body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The path this builder currently addresses
    pub fn path(&self) -> String {
        let mut path = String::new();
        let segments = [
            &self.prefix,
            &self.category,
            &self.manager,
            &self.resource,
            &self.sub_resource,
            &self.instance,
        ];
        for segment in segments.into_iter().flatten() {
            path.push('/');
            path.push_str(segment);
        }
        if self.stats {
            path.push_str("/stats");
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Send the request and return the raw response body
    pub async fn do_raw(self, ctx: &RequestContext) -> Result<Vec<u8>, BigIpError> {
        let path = self.path();
        let request = RestRequest {
            method: self.method,
            path,
            body: self.body,
        };
        let transport = self.transport;
        ctx.run(transport.execute(request)).await
    }
}
