//! iApp application services and templates (`sys/application/*`)

use crate::bigip_resource;
use crate::common::context::RequestContext;
use crate::common::request::RestClient;
use crate::resource::{Reference, ResourceClient, ResourceMeta, ResourcePath};
use serde::{Deserialize, Serialize};

/// Scalar answer to an iApp question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceVariable {
    /// Question name, e.g. `pool__addr`
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<String>,
    #[serde(default)]
    pub value: String,
}

/// Multi-valued answer to an iApp question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<String>,
    #[serde(default)]
    pub value: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceTableRow {
    #[serde(default)]
    pub row: Vec<String>,
}

/// Tabular answer to an iApp question, e.g. pool members
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<ServiceTableRow>>,
}

/// `sys/application/service` (deployed iApp)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationService {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Template full path, e.g. `/Common/f5.http`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_devicegroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_traffic_group: Option<String>,
    /// `enabled` locks the generated objects against direct edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_updates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<ServiceVariable>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ServiceList>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<ServiceTable>>,
}

bigip_resource!(ApplicationService => ResourcePath::sys("application").sub("service"), Creatable, Updatable, Deletable);

/// `sys/application/template` (iApp template)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTemplate {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_verification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_bigip_version_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_bigip_version_max: Option<String>,
    /// Modules that must be provisioned, e.g. `ltm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_modules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_signing_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions_reference: Option<Reference>,
}

bigip_resource!(ApplicationTemplate => ResourcePath::sys("application").sub("template"), Creatable, Updatable, Deletable);

/// `sys/application/apl-script` (presentation-layer script)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAplscript {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    /// Script source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_anonymous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_verification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_signing_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
}

bigip_resource!(ApplicationAplscript => ResourcePath::sys("application").sub("apl-script"), Creatable, Updatable, Deletable);

/// `sys/application/custom-stat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCustomStat {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

bigip_resource!(ApplicationCustomStat => ResourcePath::sys("application").sub("custom-stat"), Creatable, Updatable, Deletable);

/// iApp resources (`sys/application`)
#[derive(Debug, Clone)]
pub struct Application {
    rest: RestClient,
    ctx: RequestContext,
}

impl Application {
    /// Create the iApp namespace on a shared handle
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

    /// Deployed application services
    pub fn service(&self) -> ResourceClient<ApplicationService> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// iApp templates
    pub fn template(&self) -> ResourceClient<ApplicationTemplate> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// APL scripts (`apl-script`)
    pub fn aplscript(&self) -> ResourceClient<ApplicationAplscript> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }

    /// Custom statistics (`custom-stat`)
    pub fn custom_stat(&self) -> ResourceClient<ApplicationCustomStat> {
        ResourceClient::bound(self.rest.clone(), self.ctx.clone())
    }
}
