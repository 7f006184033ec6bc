//! BIG-IP client errors

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the iControl REST API
#[derive(Debug, Error)]
pub enum BigIpError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status
    #[error("BIG-IP API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the device
        status: u16,
        /// `message` from the device's error document, or the raw body
        message: String,
    },

    /// Authentication failed (bad credentials, expired token, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record could not be encoded as a request body
    #[error("failed to marshal JSON data: {0}")]
    Marshal(#[source] serde_json::Error),

    /// A response body did not match the expected record shape
    #[error("failed to unmarshal JSON data: {0}")]
    Unmarshal(#[source] serde_json::Error),

    /// The request context deadline elapsed before the device answered
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The request context was cancelled by the caller
    #[error("request cancelled")]
    Cancelled,

    /// Client configuration is missing or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request was rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl BigIpError {
    /// Classify a non-success reply for `path`
    ///
    /// 404 maps to [`BigIpError::NotFound`], 401 and 403 to
    /// [`BigIpError::Authentication`], anything else to [`BigIpError::Api`].
    pub fn from_status(status: u16, path: &str, message: String) -> Self {
        match status {
            404 => Self::NotFound(format!("{path} - {message}")),
            401 | 403 => Self::Authentication(format!("{status} - {message}")),
            _ => Self::Api { status, message },
        }
    }

    /// Whether the device reported that the addressed object does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unmarshal_keeps_source() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = BigIpError::Unmarshal(source);
        assert!(err.to_string().starts_with("failed to unmarshal JSON data: "));
        assert!(err.source().is_some(), "serde error should stay in the chain");
    }

    #[test]
    fn test_api_error_display() {
        let err = BigIpError::Api {
            status: 400,
            message: "01070734:3: Configuration error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "BIG-IP API error (400): 01070734:3: Configuration error"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_status_classification() {
        let err = BigIpError::from_status(404, "/mgmt/tm/sys/folder/~missing", "gone".into());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: /mgmt/tm/sys/folder/~missing - gone");

        assert!(matches!(
            BigIpError::from_status(401, "/", "bad creds".into()),
            BigIpError::Authentication(_)
        ));
        assert!(matches!(
            BigIpError::from_status(403, "/", "denied".into()),
            BigIpError::Authentication(_)
        ));
        assert!(matches!(
            BigIpError::from_status(409, "/", "exists".into()),
            BigIpError::Api { status: 409, .. }
        ));
    }

    #[test]
    fn test_invalid_request_display() {
        let err = BigIpError::InvalidRequest("object name is empty".to_string());
        assert_eq!(err.to_string(), "Invalid request: object name is empty");
        assert!(!err.is_not_found());
    }
}
