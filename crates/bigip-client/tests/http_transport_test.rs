#![allow(clippy::unwrap_used)]
// Integration tests for `HttpTransport` using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bigip_client::{
    AuthMode, BigIpClient, BigIpConfig, BigIpError, Folder, RequestContext, ResourceMeta,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn setup() -> (MockServer, BigIpClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = BigIpClient::new(config(&server)).unwrap();
    (server, client)
}

fn config(server: &MockServer) -> BigIpConfig {
    BigIpConfig::new(server.uri(), "admin", "secret")
}

fn device_error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({
        "code": code,
        "message": message,
        "errorStack": [],
        "apiError": 3
    }))
}

// ── Request shape ───────────────────────────────────────────────────

#[tokio::test]
async fn test_basic_auth_and_accept_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/ntp"))
        .and(basic_auth("admin", "secret"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:sys:ntp:ntpstate",
            "servers": ["10.0.0.1"],
            "timezone": "UTC"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ntp = client.sys().ntp().get().await.unwrap();
    assert_eq!(ntp.servers, Some(vec!["10.0.0.1".to_string()]));
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/tm/sys/folder"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "apps",
            "partition": "Common",
            "description": "application folders"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "apps",
            "partition": "Common",
            "fullPath": "/Common/apps",
            "generation": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folder = Folder {
        meta: ResourceMeta::new("apps").with_partition("Common"),
        description: Some("application folders".to_string()),
        ..Folder::default()
    };
    client.sys().folder().create(&folder).await.unwrap();
}

#[tokio::test]
async fn test_instance_segment_encoding() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/mgmt/tm/ltm/monitor/http/~Common~web%20health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .monitor()
        .http()
        .delete("/Common/web health")
        .await
        .unwrap();
}

// ── Status mapping ──────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/folder/~Common~missing"))
        .respond_with(device_error(404, "01020036:3: The requested folder (/Common/missing) was not found."))
        .mount(&server)
        .await;

    let err = client.sys().folder().get("/Common/missing").await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");
    assert!(err.to_string().contains("was not found"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .respond_with(device_error(401, "Authorization failed"))
        .mount(&server)
        .await;

    let result = client.validate_connection().await;
    assert!(
        matches!(result, Err(BigIpError::Authentication(_))),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_other_status_keeps_device_message() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/mgmt/tm/sys/sshd"))
        .respond_with(device_error(400, "01070734:3: Configuration error: invalid port"))
        .mount(&server)
        .await;

    let err = client
        .sys()
        .sshd()
        .update(&bigip_client::Sshd {
            port: Some(0),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        BigIpError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "01070734:3: Configuration error: invalid port");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/db"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client.sys().db().list().await.unwrap_err();
    assert!(
        matches!(&err, BigIpError::Api { status: 503, message } if message == "Service Unavailable"),
        "got: {err:?}"
    );
}

// ── Token login ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_with_token_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .and(body_partial_json(json!({
            "username": "admin",
            "password": "secret",
            "loginProviderName": "tmos"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "admin",
            "loginProviderName": "tmos",
            "token": {
                "token": "A1B2C3D4",
                "name": "A1B2C3D4",
                "timeout": 1200
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/version"))
        .and(header("X-F5-Auth-Token", "A1B2C3D4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:sys:version:versionstats",
            "entries": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BigIpClient::connect(config(&server).with_auth(AuthMode::Token))
        .await
        .unwrap();
    client.validate_connection().await.unwrap();
}

#[tokio::test]
async fn test_connect_login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .respond_with(device_error(401, "Authentication failed."))
        .mount(&server)
        .await;

    let result = BigIpClient::connect(config(&server).with_auth(AuthMode::Token)).await;
    assert!(
        matches!(result, Err(BigIpError::Authentication(_))),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connect_basic_skips_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    BigIpClient::connect(config(&server)).await.unwrap();
}

// ── Timeouts ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_context_deadline() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/folder"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client
        .sys()
        .folder()
        .with_context(RequestContext::with_timeout(Duration::from_millis(50)))
        .list()
        .await
        .unwrap_err();
    assert!(matches!(err, BigIpError::Timeout(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_http_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mgmt/tm/sys/dns"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client =
        BigIpClient::new(config(&server).with_timeout(Duration::from_millis(50))).unwrap();
    let err = client.sys().dns().get().await.unwrap_err();
    match err {
        BigIpError::Http(e) => assert!(e.is_timeout(), "got: {e:?}"),
        other => panic!("expected Http timeout, got: {other:?}"),
    }
}
