//! Integration tests against a real BIG-IP
//!
//! These tests require a reachable device.
//! Set BIGIP_URL, BIGIP_USERNAME and BIGIP_PASSWORD (plus BIGIP_INSECURE=1 for
//! self-signed certificates) and run with `--ignored`.

use bigip_client::{BigIpClient, BigIpConfig, MonitorHttp, MonitorSettings, ResourceMeta};

async fn connect() -> BigIpClient {
    let config = BigIpConfig::from_env().expect("BIGIP_* environment variables must be set");
    BigIpClient::connect(config)
        .await
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires a BIG-IP device
async fn test_validate_connection() {
    let client = connect().await;
    let version = client
        .validate_connection()
        .await
        .expect("Failed to read sys/version");
    assert!(!version.entries.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_read_system_settings() {
    let client = connect().await;
    let sys = client.sys();

    let ntp = sys.ntp().get().await.expect("Failed to read NTP settings");
    println!("NTP servers: {:?}", ntp.servers);

    let volumes = sys
        .software()
        .volume()
        .list()
        .await
        .expect("Failed to list software volumes");
    assert!(
        volumes.items.iter().any(|v| v.active == Some(true)),
        "one volume must be active"
    );

    let provision = sys.provision().get("ltm").await.expect("Failed to read ltm provisioning");
    println!("ltm provisioning level: {:?}", provision.level);
}

#[tokio::test]
#[ignore]
async fn test_http_monitor_lifecycle() {
    let client = connect().await;
    let monitors = client.monitor().http();
    let name = "/Common/bigip_client_live_test";

    let monitor = MonitorHttp {
        meta: ResourceMeta::new("bigip_client_live_test").with_partition("Common"),
        settings: MonitorSettings {
            defaults_from: Some("/Common/http".to_string()),
            interval: Some(5),
            timeout: Some(16),
            ..MonitorSettings::default()
        },
        ..MonitorHttp::default()
    };
    monitors.create(&monitor).await.expect("Failed to create monitor");

    let mut fetched = monitors.get(name).await.expect("Failed to get monitor");
    assert_eq!(fetched.settings.interval, Some(5));

    fetched.settings.interval = Some(10);
    fetched.settings.timeout = Some(31);
    monitors
        .update(name, &fetched)
        .await
        .expect("Failed to update monitor");
    let updated = monitors.get(name).await.expect("Failed to get monitor");
    assert_eq!(updated.settings.interval, Some(10));

    monitors.delete(name).await.expect("Failed to delete monitor");
    let err = monitors.get(name).await.unwrap_err();
    assert!(err.is_not_found());
}
