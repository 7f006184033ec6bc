//! Generic resource clients
//!
//! Every iControl REST configuration object is reached the same way: a fixed
//! path below `/mgmt/tm`, JSON in and out. A record type declares its path once
//! through [`Resource`], opts into mutating verbs with the marker traits
//! [`Creatable`], [`Updatable`] and [`Deletable`], and is then served by either
//! [`ResourceClient`] (collections) or [`SingletonClient`] (device singletons).

use crate::common::context::RequestContext;
use crate::common::request::{BASE_RESOURCE, RequestBuilder, RestClient, TM_RESOURCE};
use crate::error::BigIpError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// `ltm` module
pub const LTM_MANAGER: &str = "ltm";
/// `sys` module
pub const SYS_MANAGER: &str = "sys";

/// Location of a resource below `/mgmt/tm`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// Module, e.g. `ltm`
    pub manager: &'static str,
    /// Resource, e.g. `monitor`
    pub resource: &'static str,
    /// Sub-resource below a shared parent, e.g. `http`
    pub sub_resource: Option<&'static str>,
}

impl ResourcePath {
    /// A resource directly below a module
    pub const fn new(manager: &'static str, resource: &'static str) -> Self {
        Self {
            manager,
            resource,
            sub_resource: None,
        }
    }

    /// A resource below `ltm`
    pub const fn ltm(resource: &'static str) -> Self {
        Self::new(LTM_MANAGER, resource)
    }

    /// A resource below `sys`
    pub const fn sys(resource: &'static str) -> Self {
        Self::new(SYS_MANAGER, resource)
    }

    /// Nest a sub-resource below this resource
    #[must_use]
    pub const fn sub(self, sub_resource: &'static str) -> Self {
        Self {
            manager: self.manager,
            resource: self.resource,
            sub_resource: Some(sub_resource),
        }
    }

    /// Apply this path to a request builder
    pub fn apply<'a>(&self, builder: RequestBuilder<'a>) -> RequestBuilder<'a> {
        let builder = builder
            .prefix(BASE_RESOURCE)
            .resource_category(TM_RESOURCE)
            .manager_name(self.manager)
            .resource(self.resource);
        match self.sub_resource {
            Some(sub) => builder.sub_resource(sub),
            None => builder,
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{BASE_RESOURCE}/{TM_RESOURCE}/{}/{}", self.manager, self.resource)?;
        if let Some(sub) = self.sub_resource {
            write!(f, "/{sub}")?;
        }
        Ok(())
    }
}

/// A record type served by the iControl REST API
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Where the collection (or singleton) lives
    const PATH: ResourcePath;
}

/// Records that can be created with `POST`
pub trait Creatable: Resource {}

/// Records that can be replaced with `PUT`
pub trait Updatable: Resource {}

/// Records that can be removed with `DELETE`
pub trait Deletable: Resource {}

/// Declare one row of the resource table
///
/// ```ignore
/// bigip_resource!(MonitorHttp => ResourcePath::ltm("monitor").sub("http"), Creatable, Updatable, Deletable);
/// ```
#[macro_export]
macro_rules! bigip_resource {
    ($ty:ty => $path:expr) => {
        impl $crate::resource::Resource for $ty {
            const PATH: $crate::resource::ResourcePath = $path;
        }
    };
    ($ty:ty => $path:expr, $($capability:ident),+ $(,)?) => {
        $crate::bigip_resource!($ty => $path);
        $(impl $crate::resource::$capability for $ty {})+
    };
}

/// Build `/<Partition>/<Name>`
pub fn full_path(partition: &str, name: &str) -> String {
    format!("/{}/{}", partition.trim_matches('/'), name)
}

/// Metadata every configuration object carries
///
/// Apart from `name`, these fields are assigned by the device. They are skipped
/// when unset, so a freshly built record can be sent to `create` as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
    /// Object name; empty for singletons
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Administrative partition (e.g., "Common")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    /// `/<Partition>/<Name>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    /// Device-side change counter; opaque to the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    /// Type tag, e.g. `tm:ltm:monitor:http:httpstate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Canonical URL of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl ResourceMeta {
    /// Metadata carrying only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the partition
    #[must_use]
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// The device-reported full path, or one derived from partition and name
    pub fn qualified_name(&self) -> String {
        match (&self.full_path, &self.partition) {
            (Some(path), _) => path.clone(),
            (None, Some(partition)) => full_path(partition, &self.name),
            (None, None) => self.name.clone(),
        }
    }
}

/// Link to another object (`*Reference` fields)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// URL of the referenced object
    #[serde(default)]
    pub link: String,
    /// Set when the link points at a nested collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
}

/// A collection `GET` reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList<T> {
    /// Collection type tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Canonical URL of the collection
    #[serde(default, alias = "selflink", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Records; the device omits the key for empty collections
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self {
            kind: None,
            self_link: None,
            items: Vec::new(),
        }
    }
}

impl<T> ItemList<T> {
    /// Number of records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A `.../stats` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Stats type tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Canonical URL of the stats view
    #[serde(default, alias = "selflink", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Nested statistics, keyed by the device
    #[serde(default)]
    pub entries: serde_json::Map<String, serde_json::Value>,
}

fn marshal<T: Serialize>(item: &T) -> Result<String, BigIpError> {
    serde_json::to_string(item).map_err(BigIpError::Marshal)
}

/// Reject names that would leave the request on the collection path
fn instance_name(name: &str) -> Result<&str, BigIpError> {
    if name.trim_matches(|c| c == '/' || c == '~').is_empty() {
        return Err(BigIpError::InvalidRequest(format!(
            "object name {name:?} does not address an instance"
        )));
    }
    Ok(name)
}

fn unmarshal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, BigIpError> {
    serde_json::from_slice(bytes).map_err(BigIpError::Unmarshal)
}

/// CRUD client for a collection resource
pub struct ResourceClient<T> {
    rest: RestClient,
    ctx: RequestContext,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx: self.ctx.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Resource> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("path", &T::PATH.to_string())
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

impl<T: Resource> ResourceClient<T> {
    /// Create a client sharing `rest`
    pub fn new(rest: RestClient) -> Self {
        Self::bound(rest, RequestContext::background())
    }

    pub(crate) fn bound(rest: RestClient, ctx: RequestContext) -> Self {
        Self {
            rest,
            ctx,
            _record: PhantomData,
        }
    }

    /// A copy of this client bound to `ctx`
    #[must_use]
    pub fn with_context(&self, ctx: RequestContext) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx,
            _record: PhantomData,
        }
    }

    /// The collection path
    pub fn path(&self) -> ResourcePath {
        T::PATH
    }

    /// Fetch every record in the collection
    ///
    /// No pagination is performed; the single reply is the whole result.
    pub async fn list(&self) -> Result<ItemList<T>, BigIpError> {
        debug!("Listing {}", T::PATH);
        let bytes = T::PATH.apply(self.rest.get()).do_raw(&self.ctx).await?;
        unmarshal(&bytes)
    }

    /// Fetch one record by name or full path
    pub async fn get(&self, name: &str) -> Result<T, BigIpError> {
        let name = instance_name(name)?;
        debug!("Fetching {} {}", T::PATH, name);
        let bytes = T::PATH
            .apply(self.rest.get())
            .resource_instance(name)
            .do_raw(&self.ctx)
            .await?;
        unmarshal(&bytes)
    }

    /// Fetch the statistics of one record
    pub async fn stats(&self, name: &str) -> Result<Stats, BigIpError> {
        let name = instance_name(name)?;
        let bytes = T::PATH
            .apply(self.rest.get())
            .resource_instance(name)
            .stats()
            .do_raw(&self.ctx)
            .await?;
        unmarshal(&bytes)
    }
}

impl<T: Creatable> ResourceClient<T> {
    /// Create a record; device-assigned fields are not read back
    pub async fn create(&self, item: &T) -> Result<(), BigIpError> {
        let body = marshal(item)?;
        debug!("Creating {}", T::PATH);
        T::PATH
            .apply(self.rest.post())
            .body(body)
            .do_raw(&self.ctx)
            .await?;
        Ok(())
    }
}

impl<T: Updatable> ResourceClient<T> {
    /// Replace a record in full
    pub async fn update(&self, name: &str, item: &T) -> Result<(), BigIpError> {
        let name = instance_name(name)?;
        let body = marshal(item)?;
        debug!("Updating {} {}", T::PATH, name);
        T::PATH
            .apply(self.rest.put())
            .resource_instance(name)
            .body(body)
            .do_raw(&self.ctx)
            .await?;
        Ok(())
    }
}

impl<T: Deletable> ResourceClient<T> {
    /// Remove a record
    pub async fn delete(&self, name: &str) -> Result<(), BigIpError> {
        let name = instance_name(name)?;
        debug!("Deleting {} {}", T::PATH, name);
        T::PATH
            .apply(self.rest.delete())
            .resource_instance(name)
            .do_raw(&self.ctx)
            .await?;
        Ok(())
    }
}

/// Client for a device singleton such as `sys/ntp`
///
/// Singletons have no collection and cannot be deleted.
pub struct SingletonClient<T> {
    rest: RestClient,
    ctx: RequestContext,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for SingletonClient<T> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx: self.ctx.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Resource> fmt::Debug for SingletonClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonClient")
            .field("path", &T::PATH.to_string())
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

impl<T: Resource> SingletonClient<T> {
    /// Create a client sharing `rest`
    pub fn new(rest: RestClient) -> Self {
        Self::bound(rest, RequestContext::background())
    }

    pub(crate) fn bound(rest: RestClient, ctx: RequestContext) -> Self {
        Self {
            rest,
            ctx,
            _record: PhantomData,
        }
    }

    /// A copy of this client bound to `ctx`
    #[must_use]
    pub fn with_context(&self, ctx: RequestContext) -> Self {
        Self {
            rest: self.rest.clone(),
            ctx,
            _record: PhantomData,
        }
    }

    /// The singleton path
    pub fn path(&self) -> ResourcePath {
        T::PATH
    }

    /// Fetch the current settings
    pub async fn get(&self) -> Result<T, BigIpError> {
        debug!("Fetching {}", T::PATH);
        let bytes = T::PATH.apply(self.rest.get()).do_raw(&self.ctx).await?;
        unmarshal(&bytes)
    }

    /// Fetch the `stats` view (`tmsh show`)
    pub async fn show(&self) -> Result<Stats, BigIpError> {
        let bytes = T::PATH
            .apply(self.rest.get())
            .stats()
            .do_raw(&self.ctx)
            .await?;
        unmarshal(&bytes)
    }
}

impl<T: Updatable> SingletonClient<T> {
    /// Replace the settings in full
    pub async fn update(&self, item: &T) -> Result<(), BigIpError> {
        let body = marshal(item)?;
        debug!("Updating {}", T::PATH);
        T::PATH
            .apply(self.rest.put())
            .body(body)
            .do_raw(&self.ctx)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_display() {
        assert_eq!(
            ResourcePath::ltm("monitor").sub("http").to_string(),
            "/mgmt/tm/ltm/monitor/http"
        );
        assert_eq!(ResourcePath::sys("ntp").to_string(), "/mgmt/tm/sys/ntp");
    }

    #[test]
    fn test_full_path() {
        assert_eq!(full_path("Common", "http"), "/Common/http");
        assert_eq!(full_path("/Common/", "http"), "/Common/http");
    }

    #[test]
    fn test_meta_skips_unset_device_fields() {
        let meta = ResourceMeta::new("web").with_partition("Common");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"name": "web", "partition": "Common"}));
        assert_eq!(meta.qualified_name(), "/Common/web");
    }

    #[test]
    fn test_meta_reads_device_fields() {
        let meta: ResourceMeta = serde_json::from_str(
            r#"{"name":"web","partition":"Common","fullPath":"/Common/web","generation":42,
                "kind":"tm:ltm:monitor:http:httpstate","selfLink":"https://localhost/mgmt/tm/ltm/monitor/http/~Common~web?ver=15.1.0"}"#,
        )
        .unwrap();
        assert_eq!(meta.full_path.as_deref(), Some("/Common/web"));
        assert_eq!(meta.generation, Some(42));
        assert_eq!(meta.qualified_name(), "/Common/web");
    }

    #[test]
    fn test_item_list_defaults_and_alias() {
        let empty: ItemList<ResourceMeta> =
            serde_json::from_str(r#"{"kind":"tm:sys:folder:foldercollectionstate","selfLink":"x"}"#)
                .unwrap();
        assert!(empty.is_empty());

        let lower: ItemList<ResourceMeta> = serde_json::from_str(
            r#"{"items":[{"name":"a"},{"name":"b"}],"kind":"k","selflink":"https://localhost/x"}"#,
        )
        .unwrap();
        assert_eq!(lower.len(), 2);
        assert_eq!(lower.self_link.as_deref(), Some("https://localhost/x"));
        let names: Vec<String> = lower.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_singleton_meta_serializes_empty() {
        let json = serde_json::to_value(ResourceMeta::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_marshal_error_kind() {
        let mut keyed = std::collections::HashMap::new();
        keyed.insert((1u8, 2u8), "tuple keys are not JSON object keys");
        let err = marshal(&keyed).unwrap_err();
        assert!(matches!(err, BigIpError::Marshal(_)));
        assert!(err.to_string().contains("failed to marshal JSON data"));
    }

    #[test]
    fn test_instance_name_rejects_blank() {
        for blank in ["", "/", "//", "~", "/~/"] {
            let err = instance_name(blank).unwrap_err();
            assert!(matches!(err, BigIpError::InvalidRequest(_)), "{blank:?}: {err:?}");
        }
        assert_eq!(instance_name("/Common/web").unwrap(), "/Common/web");
        assert_eq!(instance_name("web").unwrap(), "web");
    }

    #[test]
    fn test_unmarshal_error_kind() {
        let err = unmarshal::<ResourceMeta>(b"not json").unwrap_err();
        assert!(matches!(err, BigIpError::Unmarshal(_)));
        assert!(err.to_string().contains("failed to unmarshal JSON data"));
    }
}
