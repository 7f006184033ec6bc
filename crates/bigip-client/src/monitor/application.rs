//! Application-protocol monitors

use super::MonitorSettings;
use crate::bigip_resource;
use crate::resource::{ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `ltm/monitor/ftp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorFtp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// File downloaded by the probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// `passive` or `port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorFtp => ResourcePath::ltm("monitor").sub("ftp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/imap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorImap {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Mailbox the probe selects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorImap => ResourcePath::ltm("monitor").sub("imap"), Creatable, Updatable, Deletable);

/// `ltm/monitor/pop3`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorPop3 {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorPop3 => ResourcePath::ltm("monitor").sub("pop3"), Creatable, Updatable, Deletable);

/// `ltm/monitor/smtp`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSmtp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    /// Domain announced in `HELO`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorSmtp => ResourcePath::ltm("monitor").sub("smtp"), Creatable, Updatable, Deletable);

/// `ltm/monitor/soap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSoap {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_value: Option<String>,
    /// `http` or `https`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_fault: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorSoap => ResourcePath::ltm("monitor").sub("soap"), Creatable, Updatable, Deletable);

/// `ltm/monitor/diameter`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorDiameter {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_realm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_application_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct_application_id: Option<u64>,
    /// Diameter message sent by the probe, e.g. `dwr`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorDiameter => ResourcePath::ltm("monitor").sub("diameter"), Creatable, Updatable, Deletable);

/// `ltm/monitor/ldap`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorLdap {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    /// Search base DN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// `none`, `ssl` or `tls`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_attributes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chase_referrals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorLdap => ResourcePath::ltm("monitor").sub("ldap"), Creatable, Updatable, Deletable);

/// `ltm/monitor/radius`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorRadius {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Shared secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nas_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorRadius => ResourcePath::ltm("monitor").sub("radius"), Creatable, Updatable, Deletable);

/// `ltm/monitor/sip`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSip {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    /// `udp`, `tcp`, `tls` or `sips`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    /// Status codes treated as healthy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_neg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipherlist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

bigip_resource!(MonitorSip => ResourcePath::ltm("monitor").sub("sip"), Creatable, Updatable, Deletable);

/// `ltm/monitor/snmp-dca`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnmpDca {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    /// `v1` or `v2c`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `UCD`, `WIN2000` or `other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_coefficient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_coefficient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_coefficient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_threshold: Option<String>,
}

bigip_resource!(MonitorSnmpDca => ResourcePath::ltm("monitor").sub("snmp-dca"), Creatable, Updatable, Deletable);

/// `ltm/monitor/snmp-dca-base`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnmpDcaBase {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(flatten)]
    pub settings: MonitorSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Custom OID variables collected by the probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<serde_json::Map<String, serde_json::Value>>,
}

bigip_resource!(MonitorSnmpDcaBase => ResourcePath::ltm("monitor").sub("snmp-dca-base"), Creatable, Updatable, Deletable);
