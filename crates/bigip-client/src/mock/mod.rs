//! Mock transport for unit testing
//!
//! [`MockTransport`] stands in for a device: configuration objects live in
//! memory, keyed by collection path and instance segment, and are served in
//! the same JSON shapes the device uses (collections wrapped in `items`,
//! `~Partition~name` instance segments, device-assigned `generation`,
//! `fullPath`, `kind` and `selfLink`).
//!
//! Canned replies and injected failures take precedence over the store, and
//! every request is recorded so tests can assert on paths and bodies.

use crate::common::request::encode_instance;
use crate::error::BigIpError;
use crate::resource::full_path;
use crate::transport::{RestRequest, Transport};
use reqwest::Method;
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const DEFAULT_PARTITION: &str = "Common";
const MOCK_HOST: &str = "https://localhost";

#[derive(Debug, Clone)]
enum Canned {
    Body(Vec<u8>),
    Status(u16, String),
}

/// In-memory iControl REST device
///
/// Clones share state, so a test can keep one handle while the client under
/// test owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    pub(crate) collections: Arc<Mutex<HashMap<String, BTreeMap<String, Value>>>>,
    pub(crate) singletons: Arc<Mutex<HashMap<String, Value>>>,
    canned: Arc<Mutex<HashMap<(Method, String), Canned>>>,
    requests: Arc<Mutex<Vec<RestRequest>>>,
    generation: Arc<Mutex<u64>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("requests", &self.requests.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}

impl MockTransport {
    /// Create an empty device
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty collection (for test setup)
    pub fn add_collection(&self, path: impl Display) {
        self.collections
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default();
    }

    /// Store a record in a collection as if it had been created (for test setup)
    ///
    /// # Panics
    /// If the record has no `name`.
    pub fn insert(&self, path: impl Display, record: Value) {
        let path = path.to_string();
        let key = instance_key(&record).expect("mock record needs a name");
        let record = self.stamp(&path, &key, record);
        self.collections
            .lock()
            .unwrap()
            .entry(path)
            .or_default()
            .insert(key, record);
    }

    /// Store the document served for a singleton path (for test setup)
    ///
    /// `PUT` only succeeds on singleton paths registered here.
    pub fn set_singleton(&self, path: impl Display, document: Value) {
        self.singletons
            .lock()
            .unwrap()
            .insert(path.to_string(), document);
    }

    /// Answer `method path` with `body` instead of consulting the store
    pub fn respond(&self, method: Method, path: impl Display, body: Value) {
        self.canned.lock().unwrap().insert(
            (method, path.to_string()),
            Canned::Body(body.to_string().into_bytes()),
        );
    }

    /// Answer `method path` with a raw body, e.g. malformed JSON
    pub fn respond_raw(&self, method: Method, path: impl Display, body: impl Into<Vec<u8>>) {
        self.canned
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Canned::Body(body.into()));
    }

    /// Fail `method path` the way the device would with `status`
    pub fn fail(&self, method: Method, path: impl Display, status: u16, message: impl Into<String>) {
        self.canned.lock().unwrap().insert(
            (method, path.to_string()),
            Canned::Status(status, message.into()),
        );
    }

    /// Delay every reply, for timeout and cancellation tests
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RestRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<RestRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Forget recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// A stored record, looked up the way the device resolves instance names
    pub fn stored(&self, path: impl Display, name: &str) -> Option<Value> {
        let collections = self.collections.lock().unwrap();
        let records = collections.get(&path.to_string())?;
        lookup(records, &encode_instance(name)).map(|(_, record)| record.clone())
    }

    /// Number of records in a collection
    pub fn stored_count(&self, path: impl Display) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(&path.to_string())
            .map_or(0, BTreeMap::len)
    }

    /// The stored singleton document
    pub fn singleton(&self, path: impl Display) -> Option<Value> {
        self.singletons.lock().unwrap().get(&path.to_string()).cloned()
    }

    /// Fill in the fields the device assigns on every write
    fn stamp(&self, collection: &str, key: &str, mut record: Value) -> Value {
        let generation = {
            let mut counter = self.generation.lock().unwrap();
            *counter += 1;
            *counter
        };
        if let Some(fields) = record.as_object_mut() {
            let partition = fields
                .get("partition")
                .and_then(Value::as_str)
                .map(str::to_string);
            let name = fields.get("name").and_then(Value::as_str).map(str::to_string);
            if let (Some(partition), Some(name)) = (partition, name) {
                fields.insert("fullPath".into(), json!(full_path(&partition, &name)));
            }
            fields.insert("generation".into(), json!(generation));
            fields
                .entry("kind")
                .or_insert_with(|| json!(kind_for(collection, "state")));
            fields.insert(
                "selfLink".into(),
                json!(format!("{MOCK_HOST}{collection}/{key}")),
            );
        }
        record
    }

    fn handle(&self, request: &RestRequest) -> Result<Vec<u8>, BigIpError> {
        let canned = self
            .canned
            .lock()
            .unwrap()
            .get(&(request.method.clone(), request.path.clone()))
            .cloned();
        match canned {
            Some(Canned::Body(body)) => return Ok(body),
            Some(Canned::Status(status, message)) => {
                return Err(BigIpError::from_status(status, &request.path, message));
            }
            None => {}
        }

        let path = request.path.as_str();
        match request.method {
            Method::GET => self.read(path),
            Method::POST => self.create(path, request.body.as_deref()),
            Method::PUT => self.replace(path, request.body.as_deref()),
            Method::DELETE => self.remove(path),
            _ => Err(BigIpError::from_status(
                405,
                path,
                format!("method {} not supported", request.method),
            )),
        }
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, BigIpError> {
        let collections = self.collections.lock().unwrap();
        if let Some(records) = collections.get(path) {
            let mut document = json!({
                "kind": kind_for(path, "collectionstate"),
                "selfLink": format!("{MOCK_HOST}{path}"),
            });
            // the device leaves `items` out of empty collections
            if !records.is_empty() {
                document["items"] = Value::Array(records.values().cloned().collect());
            }
            return Ok(document.to_string().into_bytes());
        }
        if let Some((parent, segment)) = split_instance(path) {
            if let Some(records) = collections.get(parent) {
                return lookup(records, segment)
                    .map(|(_, record)| record.to_string().into_bytes())
                    .ok_or_else(|| not_found(path));
            }
        }
        drop(collections);

        self.singletons
            .lock()
            .unwrap()
            .get(path)
            .map(|document| document.to_string().into_bytes())
            .ok_or_else(|| not_found(path))
    }

    fn create(&self, path: &str, body: Option<&str>) -> Result<Vec<u8>, BigIpError> {
        let record = parse_body(path, body)?;
        let key = instance_key(&record).ok_or_else(|| {
            BigIpError::from_status(400, path, "the name attribute is required".to_string())
        })?;

        if self
            .collections
            .lock()
            .unwrap()
            .get(path)
            .is_some_and(|records| records.contains_key(&key))
        {
            return Err(BigIpError::from_status(
                409,
                path,
                format!("01020066:3: The requested object ({key}) already exists"),
            ));
        }

        let record = self.stamp(path, &key, record);
        let body = record.to_string().into_bytes();
        self.collections
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .insert(key, record);
        Ok(body)
    }

    fn replace(&self, path: &str, body: Option<&str>) -> Result<Vec<u8>, BigIpError> {
        let mut record = parse_body(path, body)?;

        if let Some((parent, segment)) = split_instance(path) {
            let existing = {
                let collections = self.collections.lock().unwrap();
                collections.get(parent).map(|records| {
                    lookup(records, segment).map(|(key, old)| (key.clone(), old.clone()))
                })
            };
            if let Some(found) = existing {
                let (key, old) = found.ok_or_else(|| not_found(path))?;
                // identity comes from the URL, not the body
                if let (Some(fields), Some(old)) = (record.as_object_mut(), old.as_object()) {
                    for identity in ["name", "partition"] {
                        if let Some(value) = old.get(identity) {
                            fields.insert(identity.into(), value.clone());
                        }
                    }
                }
                let record = self.stamp(parent, &key, record);
                let body = record.to_string().into_bytes();
                self.collections
                    .lock()
                    .unwrap()
                    .entry(parent.to_string())
                    .or_default()
                    .insert(key, record);
                return Ok(body);
            }
        }

        // only singletons the device already serves can be replaced
        let mut singletons = self.singletons.lock().unwrap();
        let document = singletons.get_mut(path).ok_or_else(|| not_found(path))?;
        *document = record;
        Ok(document.to_string().into_bytes())
    }

    fn remove(&self, path: &str) -> Result<Vec<u8>, BigIpError> {
        let (parent, segment) = split_instance(path).ok_or_else(|| not_found(path))?;
        let mut collections = self.collections.lock().unwrap();
        let records = collections.get_mut(parent).ok_or_else(|| not_found(path))?;
        let key = lookup(records, segment)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| not_found(path))?;
        records.remove(&key);
        Ok(Vec::new())
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: RestRequest) -> Result<Vec<u8>, BigIpError> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.handle(&request)
    }
}

fn not_found(path: &str) -> BigIpError {
    BigIpError::from_status(
        404,
        path,
        "01020036:3: The requested object was not found.".to_string(),
    )
}

fn parse_body(path: &str, body: Option<&str>) -> Result<Value, BigIpError> {
    let body = body.ok_or_else(|| {
        BigIpError::from_status(400, path, "request body is required".to_string())
    })?;
    serde_json::from_str(body)
        .map_err(|e| BigIpError::from_status(400, path, format!("invalid JSON body: {e}")))
}

/// Instance segment a record is stored under
fn instance_key(record: &Value) -> Option<String> {
    let name = record.get("name")?.as_str()?;
    Some(match record.get("partition").and_then(Value::as_str) {
        Some(partition) => encode_instance(&full_path(partition, name)),
        None => encode_instance(name),
    })
}

/// Unqualified names resolve in `/Common`, as on the device
fn lookup<'a>(
    records: &'a BTreeMap<String, Value>,
    segment: &str,
) -> Option<(&'a String, &'a Value)> {
    records.get_key_value(segment).or_else(|| {
        if segment.starts_with('~') {
            return None;
        }
        records.get_key_value(&format!("~{DEFAULT_PARTITION}~{segment}"))
    })
}

fn split_instance(path: &str) -> Option<(&str, &str)> {
    let (parent, segment) = path.rsplit_once('/')?;
    (!parent.is_empty() && !segment.is_empty()).then_some((parent, segment))
}

/// `/mgmt/tm/ltm/monitor/http` -> `tm:ltm:monitor:http:http<suffix>`
fn kind_for(path: &str, suffix: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .collect();
    let last = segments.last().copied().unwrap_or_default().replace('-', "");
    format!("{}:{last}{suffix}", segments.join(":"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for() {
        assert_eq!(
            kind_for("/mgmt/tm/ltm/monitor/http", "state"),
            "tm:ltm:monitor:http:httpstate"
        );
        assert_eq!(
            kind_for("/mgmt/tm/sys/management-route", "collectionstate"),
            "tm:sys:management-route:managementroutecollectionstate"
        );
    }

    #[test]
    fn test_instance_key_uses_partition() {
        assert_eq!(
            instance_key(&json!({"name": "web", "partition": "Common"})).as_deref(),
            Some("~Common~web")
        );
        assert_eq!(instance_key(&json!({"name": "HD1.1"})).as_deref(), Some("HD1.1"));
        assert_eq!(instance_key(&json!({"partition": "Common"})), None);
    }

    #[tokio::test]
    async fn test_store_round_trip() {
        let mock = MockTransport::new();
        let path = "/mgmt/tm/sys/folder";

        let created = mock
            .execute(RestRequest::new(Method::POST, path).with_body(r#"{"name":"apps","partition":"Common"}"#))
            .await
            .unwrap();
        let created: Value = serde_json::from_slice(&created).unwrap();
        assert_eq!(created["fullPath"], "/Common/apps");
        assert_eq!(created["generation"], 1);

        let fetched = mock
            .execute(RestRequest::new(Method::GET, format!("{path}/apps")))
            .await
            .unwrap();
        let fetched: Value = serde_json::from_slice(&fetched).unwrap();
        assert_eq!(fetched["name"], "apps");

        mock.execute(RestRequest::new(Method::DELETE, format!("{path}/~Common~apps")))
            .await
            .unwrap();
        assert_eq!(mock.stored_count(path), 0);
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let mock = MockTransport::new();
        mock.insert("/mgmt/tm/sys/folder", json!({"name": "apps", "partition": "Common"}));

        let err = mock
            .execute(
                RestRequest::new(Method::POST, "/mgmt/tm/sys/folder")
                    .with_body(r#"{"name":"apps","partition":"Common"}"#),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, BigIpError::Api { status: 409, .. }));
    }

    #[tokio::test]
    async fn test_update_of_missing_record_is_not_found() {
        let mock = MockTransport::new();
        let ghost = "/mgmt/tm/sys/folder/~Common~ghost";

        let err = mock
            .execute(RestRequest::new(Method::PUT, ghost).with_body(r#"{"description":"x"}"#))
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "got: {err:?}");
        assert!(mock.singleton(ghost).is_none());

        let err = mock
            .execute(RestRequest::new(Method::GET, ghost))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        mock.add_collection("/mgmt/tm/sys/folder");
        let err = mock
            .execute(RestRequest::new(Method::PUT, ghost).with_body("{}"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_registered_singleton() {
        let mock = MockTransport::new();
        mock.set_singleton("/mgmt/tm/sys/dns", json!({"nameServers": ["10.0.0.53"]}));

        mock.execute(
            RestRequest::new(Method::PUT, "/mgmt/tm/sys/dns")
                .with_body(r#"{"nameServers":["192.0.2.53"],"search":["example.com"]}"#),
        )
        .await
        .unwrap();

        let dns = mock.singleton("/mgmt/tm/sys/dns").unwrap();
        assert_eq!(dns["nameServers"], json!(["192.0.2.53"]));
        assert_eq!(dns["search"], json!(["example.com"]));
    }
}
