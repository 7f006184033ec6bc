//! LTM health monitors
//!
//! Every monitor type lives below `/mgmt/tm/ltm/monitor/<type>` and supports
//! the full set of collection operations.
//!
//! ```no_run
//! use bigip_client::{BigIpClient, BigIpConfig, MonitorHttp, MonitorSettings, ResourceMeta};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bigip = BigIpClient::new(BigIpConfig::from_env()?)?;
//! let monitor = MonitorHttp {
//!     meta: ResourceMeta::new("web_health").with_partition("Common"),
//!     settings: MonitorSettings {
//!         defaults_from: Some("/Common/http".to_string()),
//!         interval: Some(5),
//!         timeout: Some(16),
//!         ..MonitorSettings::default()
//!     },
//!     send: Some("GET /health HTTP/1.1\\r\\nHost: web\\r\\n\\r\\n".to_string()),
//!     recv: Some("200 OK".to_string()),
//!     ..MonitorHttp::default()
//! };
//! bigip.monitor().http().create(&monitor).await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod network;

pub use application::*;
pub use network::*;

use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::ResourceClient;
use serde::{Deserialize, Serialize};

/// Settings shared by all monitor types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSettings {
    /// Parent monitor whose values are inherited (e.g., "/Common/http")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alias address and port, e.g. `*:*` or `10.0.0.1:80`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Seconds between probes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
    /// Seconds without a good reply before the member is marked down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_until_up: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_interval: Option<u64>,
    /// `enabled` or `disabled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_dscp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
}

/// Health monitor resources (`ltm/monitor`)
#[derive(Debug, Clone)]
pub struct Monitor {
    rest: RestClient,
    ctx: RequestContext,
}

impl Monitor {
    /// Create the monitor namespace on a shared handle
    pub fn new(rest: RestClient) -> Self {
        Self {
            rest,
            ctx: RequestContext::background(),
        }
    }

    /// A copy of this namespace whose clients are bound to `ctx`
    #[must_use]
    pub fn with_context(&self, ctx: RequestContext) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx,
        }
    }

    fn client<T: crate::resource::Resource>(&self) -> ResourceClient<T> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// HTTP monitors
    pub fn http(&self) -> ResourceClient<MonitorHttp> {
        self.client()
    }

    /// HTTPS monitors
    pub fn https(&self) -> ResourceClient<MonitorHttps> {
        self.client()
    }

    /// TCP monitors
    pub fn tcp(&self) -> ResourceClient<MonitorTcp> {
        self.client()
    }

    /// TCP half-open (SYN only) monitors
    pub fn tcp_half_open(&self) -> ResourceClient<MonitorTcpHalfOpen> {
        self.client()
    }

    /// UDP monitors
    pub fn udp(&self) -> ResourceClient<MonitorUdp> {
        self.client()
    }

    /// ICMP monitors
    pub fn icmp(&self) -> ResourceClient<MonitorIcmp> {
        self.client()
    }

    /// Gateway ICMP monitors
    pub fn gateway_icmp(&self) -> ResourceClient<MonitorGatewayIcmp> {
        self.client()
    }

    /// External script monitors
    pub fn external(&self) -> ResourceClient<MonitorExternal> {
        self.client()
    }

    /// Inband (passive) monitors
    pub fn inband(&self) -> ResourceClient<MonitorInband> {
        self.client()
    }

    /// FTP monitors
    pub fn ftp(&self) -> ResourceClient<MonitorFtp> {
        self.client()
    }

    /// IMAP monitors
    pub fn imap(&self) -> ResourceClient<MonitorImap> {
        self.client()
    }

    /// POP3 monitors
    pub fn pop3(&self) -> ResourceClient<MonitorPop3> {
        self.client()
    }

    /// SMTP monitors
    pub fn smtp(&self) -> ResourceClient<MonitorSmtp> {
        self.client()
    }

    /// SOAP monitors
    pub fn soap(&self) -> ResourceClient<MonitorSoap> {
        self.client()
    }

    /// Diameter monitors
    pub fn diameter(&self) -> ResourceClient<MonitorDiameter> {
        self.client()
    }

    /// LDAP monitors
    pub fn ldap(&self) -> ResourceClient<MonitorLdap> {
        self.client()
    }

    /// RADIUS monitors
    pub fn radius(&self) -> ResourceClient<MonitorRadius> {
        self.client()
    }

    /// SIP monitors
    pub fn sip(&self) -> ResourceClient<MonitorSip> {
        self.client()
    }

    /// SNMP DCA monitors
    pub fn snmp_dca(&self) -> ResourceClient<MonitorSnmpDca> {
        self.client()
    }

    /// SNMP DCA base monitors
    pub fn snmp_dca_base(&self) -> ResourceClient<MonitorSnmpDcaBase> {
        self.client()
    }
}
