//! F5 BIG-IP iControl REST API Client
//!
//! A Rust client library for the BIG-IP management API. Every configuration
//! object (health monitors, system settings, software volumes, disks, iApps)
//! is served by the same generic CRUD clients, typed by a record struct that
//! mirrors the device's JSON.
//!
//! # Example
//!
//! ```no_run
//! use bigip_client::{BigIpClient, BigIpConfig, RequestContext};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Connect with token authentication
//! let config = BigIpConfig::new("https://10.1.1.245", "admin", "admin")
//!     .with_auth(bigip_client::AuthMode::Token);
//! let bigip = BigIpClient::connect(config).await?;
//!
//! // List the installed boot locations
//! for volume in bigip.sys().software().volume().list().await? {
//!     println!("{} {:?}", volume.meta.name, volume.version);
//! }
//!
//! // Read NTP settings with a deadline
//! let ntp = bigip
//!     .sys()
//!     .ntp()
//!     .with_context(RequestContext::with_timeout(Duration::from_secs(5)))
//!     .get()
//!     .await?;
//! println!("NTP servers: {:?}", ntp.servers);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Typed resources**: one record type per endpoint; verbs the device does
//!   not support are not available at compile time
//! - **Deadlines and cancellation**: per-client [`RequestContext`]
//! - **Basic or token auth**: `X-F5-Auth-Token` login via `/mgmt/shared/authn/login`
//! - **Mockable transport**: [`Transport`] trait, with an in-memory device
//!   behind the `test-util` feature

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod monitor;
pub mod resource;
pub mod sys;
#[path = "trait.rs"]
pub mod transport;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::BigIpClient;
pub use common::HttpTransport;
pub use common::context::RequestContext;
pub use common::request::{RequestBuilder, RestClient};
pub use config::{AuthMode, BigIpConfig, TlsMode};
pub use error::BigIpError;
pub use monitor::{Monitor, MonitorSettings, application::*, network::*};
pub use resource::{
    Creatable, Deletable, ItemList, Reference, Resource, ResourceClient, ResourceMeta,
    ResourcePath, SingletonClient, Stats, Updatable,
};
pub use sys::{
    Sys, application::*, disk::*, ecm::*, ipfix::*, raid::*, settings::*, software::*,
};
pub use transport::{RestRequest, Transport};
#[cfg(feature = "test-util")]
pub use mock::MockTransport;
