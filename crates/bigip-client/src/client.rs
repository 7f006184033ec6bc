//! BIG-IP API client
//!
//! [`BigIpClient`] owns the transport and hands out the module namespaces
//! ([`Sys`], [`Monitor`]). Every namespace and resource client shares the
//! same transport through a cheap [`RestClient`] clone.

use crate::common::HttpTransport;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::config::{AuthMode, BigIpConfig};
use crate::error::BigIpError;
use crate::monitor::Monitor;
use crate::resource::Stats;
use crate::sys::Sys;
use crate::transport::Transport;
use std::sync::Arc;
use tracing::debug;

/// iControl REST client
#[derive(Debug, Clone)]
pub struct BigIpClient {
    rest: RestClient,
}

impl BigIpClient {
    /// Create a client using basic authentication on every request
    ///
    /// No request is made; use [`BigIpClient::validate_connection`] to check
    /// reachability and credentials.
    pub fn new(config: BigIpConfig) -> Result<Self, BigIpError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client and, for [`AuthMode::Token`], log in first
    pub async fn connect(config: BigIpConfig) -> Result<Self, BigIpError> {
        let mut transport = HttpTransport::new(&config)?;
        if config.auth == AuthMode::Token {
            transport
                .login(&RequestContext::with_timeout(config.timeout))
                .await?;
        }
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over any transport (e.g. `MockTransport` in tests)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            rest: RestClient::new(transport),
        }
    }

    /// The shared request handle, for paths without a typed client
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// System resources (`/mgmt/tm/sys`)
    pub fn sys(&self) -> Sys {
        Sys::new(self.rest.clone())
    }

    /// Health monitors (`/mgmt/tm/ltm/monitor`)
    pub fn monitor(&self) -> Monitor {
        Monitor::new(self.rest.clone())
    }

    /// Check connectivity and credentials with a lightweight authenticated request
    ///
    /// Returns the device's `sys/version` report.
    pub async fn validate_connection(&self) -> Result<Stats, BigIpError> {
        debug!("Validating BIG-IP credentials and connectivity");
        let version = self.sys().version().await?;
        debug!("Connection validated");
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RestRequest;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: RestRequest) -> Result<Vec<u8>, BigIpError> {
            self.paths.lock().unwrap().push(request.path);
            Ok(br#"{"kind":"tm:sys:version:versionstats","entries":{}}"#.to_vec())
        }
    }

    #[tokio::test]
    async fn test_validate_connection_reads_sys_version() {
        let transport = Arc::new(RecordingTransport::default());
        let client = BigIpClient::with_transport(transport.clone());

        let version = client.validate_connection().await.unwrap();
        assert_eq!(version.kind.as_deref(), Some("tm:sys:version:versionstats"));
        assert_eq!(
            *transport.paths.lock().unwrap(),
            vec!["/mgmt/tm/sys/version".to_string()]
        );
    }

    #[test]
    fn test_namespaces_share_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let client = BigIpClient::with_transport(transport.clone());
        let _sys = client.sys();
        let _monitor = client.monitor();
        // client + two namespaces + the local handle
        assert_eq!(Arc::strong_count(&transport), 4);
    }
}
