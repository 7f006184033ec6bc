//! IPFIX information elements (`sys/ipfix/*`)

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{ResourceClient, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// `sys/ipfix/element`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpfixElement {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IANA or enterprise element ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// e.g. `unsigned32`, `ipv4Address`, `string`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// 0 for IANA-registered elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<u64>,
    /// Length in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

bigip_resource!(IpfixElement => ResourcePath::sys("ipfix").sub("element"), Creatable, Updatable, Deletable);

/// `sys/ipfix/irules-element` (element emitted from iRules)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpfixIrulesElement {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

bigip_resource!(IpfixIrulesElement => ResourcePath::sys("ipfix").sub("irules-element"), Creatable, Updatable, Deletable);

/// IPFIX resources (`sys/ipfix`)
#[derive(Debug, Clone)]
pub struct IpFix {
    rest: RestClient,
    ctx: RequestContext,
}

impl IpFix {
    /// Create the IPFIX namespace on a shared handle
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

    /// IPFIX information elements
    pub fn element(&self) -> ResourceClient<IpfixElement> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// IPFIX elements for iRules
    pub fn irules_element(&self) -> ResourceClient<IpfixIrulesElement> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
