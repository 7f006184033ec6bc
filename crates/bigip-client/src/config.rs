//! Client configuration
//!
//! Connection settings for a BIG-IP device, either built in code or loaded
//! from `BIGIP_*` environment variables.

use crate::error::BigIpError;
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout applied by the HTTP client
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How requests authenticate against the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// HTTP basic auth on every request
    #[default]
    Basic,
    /// Log in once via `/mgmt/shared/authn/login` and send `X-F5-Auth-Token`
    Token,
}

/// TLS verification mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// Use the bundled webpki root store
    #[default]
    System,
    /// Trust an additional CA certificate from the given PEM file
    CustomCa(PathBuf),
    /// Accept any certificate (devices ship with self-signed certificates)
    DangerAcceptInvalid,
}

/// Connection settings for one BIG-IP device
#[derive(Clone)]
pub struct BigIpConfig {
    /// Base URL of the management interface (e.g., "https://10.1.1.245")
    pub url: String,
    /// Administrative user
    pub username: String,
    /// Password for `username`
    pub password: String,
    /// Authentication scheme
    pub auth: AuthMode,
    /// Per-request timeout of the underlying HTTP client
    pub timeout: Duration,
    /// Certificate verification
    pub tls: TlsMode,
}

impl std::fmt::Debug for BigIpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigIpConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("auth", &self.auth)
            .field("timeout", &self.timeout)
            .field("tls", &self.tls)
            .finish()
    }
}

impl Default for BigIpConfig {
    fn default() -> Self {
        Self {
            url: "https://localhost".to_string(),
            username: "admin".to_string(),
            password: String::new(),
            auth: AuthMode::Basic,
            timeout: DEFAULT_TIMEOUT,
            tls: TlsMode::System,
        }
    }
}

impl BigIpConfig {
    /// Create a config with basic auth and default settings
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Switch to token authentication
    #[must_use]
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    /// Override the HTTP client timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override certificate verification
    #[must_use]
    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    /// Load configuration from environment variables
    ///
    /// * `BIGIP_URL` - management URL (default `https://localhost`)
    /// * `BIGIP_USERNAME` - user (default `admin`)
    /// * `BIGIP_PASSWORD` - required
    /// * `BIGIP_AUTH` - `basic` (default) or `token`
    /// * `BIGIP_TIMEOUT_SECS` - HTTP timeout in seconds (default 30)
    /// * `BIGIP_INSECURE` - `1`/`true` to accept invalid certificates
    /// * `BIGIP_CA_CERT` - path to an extra CA certificate (PEM)
    pub fn from_env() -> Result<Self, BigIpError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BigIpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup("BIGIP_URL").unwrap_or(defaults.url);
        let username = lookup("BIGIP_USERNAME").unwrap_or(defaults.username);
        let password = lookup("BIGIP_PASSWORD").ok_or_else(|| {
            BigIpError::InvalidConfig(
                "BIGIP_PASSWORD environment variable is required".to_string(),
            )
        })?;

        let auth = match lookup("BIGIP_AUTH").as_deref().map(str::to_ascii_lowercase) {
            None => AuthMode::Basic,
            Some(mode) if mode == "basic" => AuthMode::Basic,
            Some(mode) if mode == "token" => AuthMode::Token,
            Some(other) => {
                return Err(BigIpError::InvalidConfig(format!(
                    "BIGIP_AUTH must be 'basic' or 'token', got '{other}'"
                )));
            }
        };

        let timeout = match lookup("BIGIP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| {
                    BigIpError::InvalidConfig(format!("BIGIP_TIMEOUT_SECS '{raw}': {e}"))
                })?,
            None => defaults.timeout,
        };

        let insecure = lookup("BIGIP_INSECURE")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));
        let tls = if insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(path) = lookup("BIGIP_CA_CERT") {
            TlsMode::CustomCa(PathBuf::from(path))
        } else {
            TlsMode::System
        };

        Ok(Self {
            url,
            username,
            password,
            auth,
            timeout,
            tls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = BigIpConfig::from_lookup(lookup_from(&[("BIGIP_PASSWORD", "secret")])).unwrap();
        assert_eq!(config.url, "https://localhost");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert_eq!(config.auth, AuthMode::Basic);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.tls, TlsMode::System);
    }

    #[test]
    fn test_from_lookup_requires_password() {
        let err = BigIpConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, BigIpError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = BigIpConfig::from_lookup(lookup_from(&[
            ("BIGIP_URL", "https://10.1.1.245"),
            ("BIGIP_USERNAME", "ops"),
            ("BIGIP_PASSWORD", "pw"),
            ("BIGIP_AUTH", "Token"),
            ("BIGIP_TIMEOUT_SECS", "5"),
            ("BIGIP_INSECURE", "true"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://10.1.1.245");
        assert_eq!(config.username, "ops");
        assert_eq!(config.auth, AuthMode::Token);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.tls, TlsMode::DangerAcceptInvalid);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let bad_auth = BigIpConfig::from_lookup(lookup_from(&[
            ("BIGIP_PASSWORD", "pw"),
            ("BIGIP_AUTH", "kerberos"),
        ]));
        assert!(matches!(bad_auth, Err(BigIpError::InvalidConfig(_))));

        let bad_timeout = BigIpConfig::from_lookup(lookup_from(&[
            ("BIGIP_PASSWORD", "pw"),
            ("BIGIP_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(bad_timeout, Err(BigIpError::InvalidConfig(_))));
    }

    #[test]
    fn test_ca_cert_path() {
        let config = BigIpConfig::from_lookup(lookup_from(&[
            ("BIGIP_PASSWORD", "pw"),
            ("BIGIP_CA_CERT", "/etc/ssl/bigip-ca.pem"),
        ]))
        .unwrap();
        assert_eq!(
            config.tls,
            TlsMode::CustomCa(PathBuf::from("/etc/ssl/bigip-ca.pem"))
        );
    }

    #[test]
    fn test_builder_helpers() {
        let config = BigIpConfig::new("https://bigip", "admin", "admin")
            .with_auth(AuthMode::Token)
            .with_timeout(Duration::from_secs(3))
            .with_tls(TlsMode::DangerAcceptInvalid);
        assert_eq!(config.auth, AuthMode::Token);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.tls, TlsMode::DangerAcceptInvalid);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = BigIpConfig::new("https://bigip", "admin", "hunter2");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
