//! Software images, hotfixes and boot volumes (`sys/software/*`)

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{ResourceClient, ResourceMeta, ResourcePath, SingletonClient};
use serde::{Deserialize, Serialize};

/// Partition layout of a [`SoftwareVolume`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMedia {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_boot_location: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// `sys/software/volume` (boot location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareVolume {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// Whether this is the running boot location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basebuild: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Install state, e.g. `complete` or `installing 10.000 pct`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<VolumeMedia>>,
}

bigip_resource!(SoftwareVolume => ResourcePath::sys("software").sub("volume"), Creatable, Deletable);

/// `sys/software/image` (ISO in `/shared/images`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareImage {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Human-readable size, e.g. `2040 MB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

bigip_resource!(SoftwareImage => ResourcePath::sys("software").sub("image"), Deletable);

/// `sys/software/hotfix`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareHotfix {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

bigip_resource!(SoftwareHotfix => ResourcePath::sys("software").sub("hotfix"), Deletable);

/// `sys/software/update` (singleton: update-check settings)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareUpdate {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_phonehome: Option<String>,
    /// `daily`, `weekly` or `monthly`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

bigip_resource!(SoftwareUpdate => ResourcePath::sys("software").sub("update"), Updatable);

/// Software resources (`sys/software`)
#[derive(Debug, Clone)]
pub struct Software {
    rest: RestClient,
    ctx: RequestContext,
}

impl Software {
    /// Create the software namespace on a shared handle
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

    /// Boot locations (`sys/software/volume`)
    pub fn volume(&self) -> ResourceClient<SoftwareVolume> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Uploaded base images (`sys/software/image`)
    pub fn image(&self) -> ResourceClient<SoftwareImage> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Uploaded hotfix images (`sys/software/hotfix`)
    pub fn hotfix(&self) -> ResourceClient<SoftwareHotfix> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Automatic update check settings (`sys/software/update`)
    pub fn update(&self) -> SingletonClient<SoftwareUpdate> {
        SingletonClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
