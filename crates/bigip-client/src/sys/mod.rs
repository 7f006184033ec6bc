//! System resources (`/mgmt/tm/sys`)
//!
//! [`Sys`] serves the device singletons and collections directly and hands
//! out the nested namespaces ([`Software`], [`Disk`], [`IpFix`], [`Raid`],
//! [`Application`], [`Ecm`]) by value.

pub mod application;
pub mod disk;
pub mod ecm;
pub mod ipfix;
pub mod raid;
pub mod settings;
pub mod software;

pub use application::*;
pub use disk::*;
pub use ecm::*;
pub use ipfix::*;
pub use raid::*;
pub use settings::*;
pub use software::*;

use crate::common::context::RequestContext;
use crate::common::request::{BASE_RESOURCE, RestClient, TM_RESOURCE};
use crate::error::BigIpError;
use crate::resource::{Resource, ResourceClient, SYS_MANAGER, SingletonClient, Stats};

/// System resources (`sys`)
#[derive(Debug, Clone)]
pub struct Sys {
    rest: RestClient,
    ctx: RequestContext,
}

impl Sys {
    /// Create the system namespace on a shared handle
    pub fn new(rest: RestClient) -> Self {
        Self {
            rest,
            ctx: RequestContext::background(),
        }
    }

    /// A copy of this namespace bound to `ctx`
    ///
    /// Clients and nested namespaces handed out afterwards inherit `ctx`, and
    /// [`Sys::version`] runs under it.
    #[must_use]
    pub fn with_context(&self, ctx: RequestContext) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx,
        }
    }

    fn singleton<T: Resource>(&self) -> SingletonClient<T> {
        SingletonClient::bound(self.rest.clone(), self.ctx.clone())
    }

    fn collection<T: Resource>(&self) -> ResourceClient<T> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// NTP servers and timezone
    pub fn ntp(&self) -> SingletonClient<Ntp> {
        self.singleton()
    }

    /// SNMP agent settings
    pub fn snmp(&self) -> SingletonClient<Snmp> {
        self.singleton()
    }

    /// SSH daemon settings
    pub fn sshd(&self) -> SingletonClient<Sshd> {
        self.singleton()
    }

    /// Configuration utility web server settings
    pub fn httpd(&self) -> SingletonClient<Httpd> {
        self.singleton()
    }

    /// Resolver settings
    pub fn dns(&self) -> SingletonClient<Dns> {
        self.singleton()
    }

    /// Hostname, GUI and console settings
    pub fn global_settings(&self) -> SingletonClient<GlobalSettings> {
        self.singleton()
    }

    /// Remote syslog servers and log levels
    pub fn syslog(&self) -> SingletonClient<Syslog> {
        self.singleton()
    }

    /// Database variables; read and update only
    pub fn db(&self) -> ResourceClient<Db> {
        self.collection()
    }

    /// Module provisioning levels; read and update only
    pub fn provision(&self) -> ResourceClient<Provision> {
        self.collection()
    }

    /// Administrative folders
    pub fn folder(&self) -> ResourceClient<Folder> {
        self.collection()
    }

    /// Management interface addresses
    pub fn management_ip(&self) -> ResourceClient<ManagementIp> {
        self.collection()
    }

    /// Management interface routes
    pub fn management_route(&self) -> ResourceClient<ManagementRoute> {
        self.collection()
    }

    /// Software images, hotfixes and boot locations
    pub fn software(&self) -> Software {
        Software::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// Logical disks and application volumes
    pub fn disk(&self) -> Disk {
        Disk::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// IPFIX elements
    pub fn ipfix(&self) -> IpFix {
        IpFix::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// RAID hardware views
    pub fn raid(&self) -> Raid {
        Raid::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// iApp services, templates and scripts
    pub fn application(&self) -> Application {
        Application::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// Cloud manager resources
    pub fn ecm(&self) -> Ecm {
        Ecm::new(self.rest.clone()).with_context(self.ctx.clone())
    }

    /// Software version of the running boot location (`tmsh show sys version`)
    pub async fn version(&self) -> Result<Stats, BigIpError> {
        let bytes = self
            .rest
            .get()
            .prefix(BASE_RESOURCE)
            .resource_category(TM_RESOURCE)
            .manager_name(SYS_MANAGER)
            .resource("version")
            .do_raw(&self.ctx)
            .await?;
        serde_json::from_slice(&bytes).map_err(BigIpError::Unmarshal)
    }
}
