//! Disk layout (`sys/disk/*`)

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{ResourceClient, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `sys/disk/logical-disk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalDisk {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// `mixed` or `none`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Size in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vg_free: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vg_in_use: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vg_reserved: Option<u64>,
}

bigip_resource!(LogicalDisk => ResourcePath::sys("disk").sub("logical-disk"));

/// `sys/disk/application-volume`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationVolume {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// Logical disk holding the volume, e.g. `MD1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_disk: Option<String>,
    /// Module owning the volume, e.g. `mysqldb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preservability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizeable: Option<bool>,
    /// Size in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

bigip_resource!(ApplicationVolume => ResourcePath::sys("disk").sub("application-volume"), Creatable, Updatable, Deletable);

/// Disk resources (`sys/disk`)
#[derive(Debug, Clone)]
pub struct Disk {
    rest: RestClient,
    ctx: RequestContext,
}

impl Disk {
    /// Create the disk namespace on a shared handle
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

    /// Logical disks; read only
    pub fn logical_disk(&self) -> ResourceClient<LogicalDisk> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Application volumes carved out of a logical disk
    pub fn application_volume(&self) -> ResourceClient<ApplicationVolume> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
