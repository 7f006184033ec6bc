//! Transport-level monitors: HTTP(S), TCP, UDP, ICMP and friends

use super::MonitorSettings;
use crate::bigip_resource;
use crate::resource::{ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `ltm/monitor/http`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorHttp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    /// Request string sent to the member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    /// Regular expression a healthy reply must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_disable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_limit: Option<u64>,
}

bigip_resource!(MonitorHttp => ResourcePath::ltm("monitor").sub("http"), Creatable, Updatable, Deletable);

/// `ltm/monitor/https`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorHttps {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_disable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
    /// OpenSSL cipher string used for the probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipherlist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    /// Client certificate presented to the member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_profile: Option<String>,
}

bigip_resource!(MonitorHttps => ResourcePath::ltm("monitor").sub("https"), Creatable, Updatable, Deletable);

/// `ltm/monitor/tcp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorTcp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_disable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
}

bigip_resource!(MonitorTcp => ResourcePath::ltm("monitor").sub("tcp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/tcp-half-open`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorTcpHalfOpen {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
}

bigip_resource!(MonitorTcpHalfOpen => ResourcePath::ltm("monitor").sub("tcp-half-open"), Creatable, Updatable, Deletable);

/// `ltm/monitor/udp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorUdp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_disable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorUdp => ResourcePath::ltm("monitor").sub("udp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/icmp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorIcmp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
}

bigip_resource!(MonitorIcmp => ResourcePath::ltm("monitor").sub("icmp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/gateway-icmp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorGatewayIcmp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
}

bigip_resource!(MonitorGatewayIcmp => ResourcePath::ltm("monitor").sub("gateway-icmp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/external`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorExternal {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    /// External program file object, e.g. "/Common/arg_example"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Environment handed to the script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<serde_json::Map<String, serde_json::Value>>,
}

bigip_resource!(MonitorExternal => ResourcePath::ltm("monitor").sub("external"), Creatable, Updatable, Deletable);

/// `ltm/monitor/inband`
///
/// Passive monitor; interval and timeout do not apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorInband {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_time: Option<u64>,
}

bigip_resource!(MonitorInband => ResourcePath::ltm("monitor").sub("inband"), Creatable, Updatable, Deletable);
