//! Common utilities for the iControl REST client
//!
//! Provides the HTTP transport, the request builder and request contexts
//! shared by every resource module.

pub mod context;
pub mod request;

use crate::config::{BigIpConfig, TlsMode};
use crate::error::BigIpError;
use crate::transport::{RestRequest, Transport};
use context::RequestContext;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Header carrying an iControl REST token
pub const AUTH_TOKEN_HEADER: &str = "X-F5-Auth-Token";

/// Error document returned by the device on failures
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: LoginToken,
}

#[derive(Debug, Deserialize)]
struct LoginToken {
    token: String,
}

/// reqwest-backed transport with authentication
///
/// Requests use basic auth until [`HttpTransport::login`] stores a token.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scheme = if self.token.is_some() { "token" } else { "basic" };
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("auth", &scheme)
            .finish_non_exhaustive()
    }
}

/// Build a `reqwest::Client` from the connection settings
pub fn build_http_client(config: &BigIpConfig) -> Result<Client, BigIpError> {
    let mut builder = Client::builder().timeout(config.timeout);

    match &config.tls {
        TlsMode::System => {}
        TlsMode::CustomCa(path) => {
            let pem = std::fs::read(path).map_err(|e| {
                BigIpError::InvalidConfig(format!(
                    "failed to read CA cert {}: {e}",
                    path.display()
                ))
            })?;
            let cert = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| BigIpError::InvalidConfig(format!("invalid CA cert: {e}")))?;
            builder = builder.add_root_certificate(cert);
        }
        TlsMode::DangerAcceptInvalid => {
            builder = builder.danger_accept_invalid_certs(true);
        }
    }

    builder.build().map_err(BigIpError::Http)
}

impl HttpTransport {
    /// Create a transport using basic auth
    pub fn new(config: &BigIpConfig) -> Result<Self, BigIpError> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a transport around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: &BigIpConfig) -> Self {
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            token: None,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a token instead of basic auth
    pub fn uses_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Obtain a token from `/mgmt/shared/authn/login` and use it from now on
    pub async fn login(&mut self, ctx: &RequestContext) -> Result<(), BigIpError> {
        let url = self.build_url("/mgmt/shared/authn/login");
        debug!("POST {} as {}", url, self.username);

        let body = json!({
            "username": self.username,
            "password": self.password,
            "loginProviderName": "tmos",
        });

        let send = async {
            let response = self
                .client
                .post(&url)
                .header("Accept", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(BigIpError::Http)?;

            let status = response.status();
            let text = response.text().await.map_err(BigIpError::Http)?;
            if !status.is_success() {
                warn!("login for {} rejected: {}", self.username, status);
                return Err(BigIpError::Authentication(format!(
                    "login failed: {} - {}",
                    status,
                    error_message(&text)
                )));
            }

            serde_json::from_str::<LoginResponse>(&text).map_err(BigIpError::Unmarshal)
        };

        let login = ctx.run(send).await?;
        self.token = Some(login.token.token);
        debug!("Token acquired for {}", self.username);
        Ok(())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token),
            None => request.basic_auth(&self.username, Some(&self.password)),
        }
    }
}

/// Pull `message` out of the device's error document, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|doc| doc.message)
        .unwrap_or_else(|| body.to_string())
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: RestRequest) -> Result<Vec<u8>, BigIpError> {
        let url = self.build_url(&request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header("Accept", "application/json");
        if let Some(body) = request.body {
            debug!("{} {} with {} byte body", request.method, url, body.len());
            builder = builder.header("Content-Type", "application/json").body(body);
        } else {
            debug!("{} {}", request.method, url);
        }

        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(BigIpError::Http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(BigIpError::Http)?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let text = String::from_utf8_lossy(&bytes);
        let message = error_message(&text);
        warn!("{} {} failed: {}", request.method, request.path, status);

        Err(BigIpError::from_status(
            status.as_u16(),
            &request.path,
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_device_document() {
        let body = r#"{"code":400,"message":"01020036:3: The requested monitor was not found.","errorStack":[]}"#;
        assert_eq!(
            error_message(body),
            "01020036:3: The requested monitor was not found."
        );
        assert_eq!(error_message("<html>gateway</html>"), "<html>gateway</html>");
    }

    #[test]
    fn test_base_url_trimmed() {
        let config = BigIpConfig::new("https://bigip.example/", "admin", "admin");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "https://bigip.example");
        assert_eq!(
            transport.build_url("/mgmt/tm/sys/ntp"),
            "https://bigip.example/mgmt/tm/sys/ntp"
        );
        assert!(!transport.uses_token());
    }

    #[test]
    fn test_debug_hides_password() {
        let config = BigIpConfig::new("https://bigip.example", "admin", "hunter2");
        let transport = HttpTransport::new(&config).unwrap();
        let rendered = format!("{transport:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
