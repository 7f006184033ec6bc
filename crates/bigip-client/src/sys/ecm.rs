//! Enterprise cloud manager (`sys/ecm/*`)

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{ResourceClient, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `sys/ecm/cloud-provider`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcmCloudProvider {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider-specific property definitions, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_template: Option<Vec<serde_json::Value>>,
}

bigip_resource!(EcmCloudProvider => ResourcePath::sys("ecm").sub("cloud-provider"), Creatable, Updatable, Deletable);

/// Cloud manager resources (`sys/ecm`)
#[derive(Debug, Clone)]
pub struct Ecm {
    rest: RestClient,
    ctx: RequestContext,
}

impl Ecm {
    /// Create the cloud manager namespace on a shared handle
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

    /// Cloud provider definitions
    pub fn cloud_provider(&self) -> ResourceClient<EcmCloudProvider> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
