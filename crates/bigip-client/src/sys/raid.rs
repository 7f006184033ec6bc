//! RAID state on appliances with mirrored drives (`sys/raid/*`)
//!
//! These objects describe hardware and are read-only through the API.
//! Attributes that vary by platform are kept in `extra`.

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{ResourceClient, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `sys/raid/array`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidArray {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

bigip_resource!(RaidArray => ResourcePath::sys("raid").sub("array"));

/// `sys/raid/disk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidDisk {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// `yes` when the drive is part of the array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

bigip_resource!(RaidDisk => ResourcePath::sys("raid").sub("disk"));

/// `sys/raid/bay`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBay {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Drive currently seated in the bay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

bigip_resource!(RaidBay => ResourcePath::sys("raid").sub("bay"));

/// RAID resources (`sys/raid`)
#[derive(Debug, Clone)]
pub struct Raid {
    rest: RestClient,
    ctx: RequestContext,
}

impl Raid {
    /// Create the RAID namespace on a shared handle
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

    /// RAID arrays; read only
    pub fn array(&self) -> ResourceClient<RaidArray> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Physical disks; read only
    pub fn disk(&self) -> ResourceClient<RaidDisk> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Drive bays; read only
    pub fn bay(&self) -> ResourceClient<RaidBay> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
