//! Device-level system settings (`sys/*`)

use crate::bigip_resource;
use crate::resource::{Reference, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `sys/ntp` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ntp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// NTP server addresses or hostnames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<String>>,
    /// Olson time zone, e.g. `America/Los_Angeles`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_reference: Option<Reference>,
}

bigip_resource!(Ntp => ResourcePath::sys("ntp"), Updatable);

/// `sys/snmp` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snmp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// Addresses the agent listens on, e.g. `tcp6:161`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_trap: Option<String>,
    /// Client addresses allowed to query the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_trap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bigip_traps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_max1: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_max5: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_max15: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys_services: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap_community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communities_reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traps_reference: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_reference: Option<Reference>,
}

bigip_resource!(Snmp => ResourcePath::sys("snmp"), Updatable);

/// `sys/sshd` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sshd {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// Client addresses allowed to connect, or `ALL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_text: Option<String>,
    /// Idle timeout in seconds, 0 disables it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactivity_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u64>,
    /// Raw lines appended to `sshd_config`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

bigip_resource!(Sshd => ResourcePath::sys("sshd"), Updatable);

/// `sys/httpd` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Httpd {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_pam_idle_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_pam_validate_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_clients: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_http_to_https: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_ciphersuite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_port: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_protocol: Option<String>,
}

bigip_resource!(Httpd => ResourcePath::sys("httpd"), Updatable);

/// `sys/dns` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dns {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_dots: Option<u64>,
    /// Search domains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

bigip_resource!(Dns => ResourcePath::sys("dns"), Updatable);

/// `sys/global-settings` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_inactivity_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui_security_banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui_security_banner_text: Option<String>,
    /// `enabled` until the setup utility has been completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui_setup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcd_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_dhcp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_reboot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_boot: Option<String>,
}

bigip_resource!(GlobalSettings => ResourcePath::sys("global-settings"), Updatable);

/// Remote log destination of [`Syslog`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyslogRemoteServer {
    pub name: String,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_port: Option<u64>,
}

/// `sys/syslog` (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syslog {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_priv_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_priv_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_log: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kern_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kern_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_servers: Option<Vec<SyslogRemoteServer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

bigip_resource!(Syslog => ResourcePath::sys("syslog"), Updatable);

/// `sys/db` entry (database variable)
///
/// Variables are fixed by the software release; they can be read and
/// changed but never created or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Db {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scf_config: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<String>,
}

bigip_resource!(Db => ResourcePath::sys("db"), Updatable);

/// `sys/provision` entry (module resource allocation)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provision {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// `none`, `minimum`, `nominal`, `dedicated` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_ratio: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_ratio: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_ratio: Option<u64>,
}

bigip_resource!(Provision => ResourcePath::sys("provision"), Updatable);

/// `sys/folder`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_devicegroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_traffic_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_ref_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_group: Option<String>,
}

bigip_resource!(Folder => ResourcePath::sys("folder"), Creatable, Updatable, Deletable);

/// `sys/management-ip`
///
/// The object name is the address in CIDR form, e.g. `10.1.1.245/24`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementIp {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

bigip_resource!(ManagementIp => ResourcePath::sys("management-ip"), Creatable, Updatable, Deletable);

/// `sys/management-route`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementRoute {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Destination network, or `default`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u64>,
}

bigip_resource!(ManagementRoute => ResourcePath::sys("management-route"), Creatable, Updatable, Deletable);
