//! Error types for the API client.

use serde::{Deserialize, Serialize};

/// Error payload returned by the management API on non-success responses.
///
/// Most endpoints send `{"id": "...", "message": "..."}`; some older ones use
/// `reason` instead of `message`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Machine-readable error code, e.g. `resource.not.found`.
    #[serde(default)]
    pub id: String,
    /// Human-readable description.
    #[serde(default, alias = "reason")]
    pub message: String,
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request URL could not be built from the base URL and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The client configuration is missing a value or holds an invalid one.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The API answered 2xx but the body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The API returned a non-success status.
    #[error("Request failed with status {status}{}", format_api_error(.error))]
    HttpStatus {
        status: u16,
        error: Option<ApiErrorBody>,
        body: String,
    },
    /// A name lookup scanned every page without an exact match.
    #[error("no {resource} named '{name}' was found")]
    NotFoundByName { resource: &'static str, name: String },
    /// The caller's cancellation token fired before the call completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// HTTP status of an upstream error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True only for an upstream 404. Name lookups that find nothing are a
    /// different error ([`Error::NotFoundByName`]).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HttpStatus { status: 404, .. })
    }

    /// Upstream error payload, when the API sent one.
    pub fn api_error(&self) -> Option<&ApiErrorBody> {
        match self {
            Error::HttpStatus { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Transport failures, 429 and 5xx responses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

fn format_api_error(error: &Option<ApiErrorBody>) -> String {
    match error {
        Some(body) if !body.message.is_empty() => format!(": {} ({})", body.message, body.id),
        Some(body) if !body.id.is_empty() => format!(": {}", body.id),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_status(status: u16, error: Option<ApiErrorBody>) -> Error {
        Error::HttpStatus {
            status,
            error,
            body: String::new(),
        }
    }

    #[test]
    fn not_found_is_404_only() {
        assert!(http_status(404, None).is_not_found());
        assert!(!http_status(400, None).is_not_found());
        assert!(!Error::NotFoundByName {
            resource: "segment group",
            name: "x".to_string(),
        }
        .is_not_found());
    }

    #[test]
    fn retryable_statuses() {
        assert!(http_status(429, None).is_retryable());
        assert!(http_status(500, None).is_retryable());
        assert!(http_status(503, None).is_retryable());
        assert!(!http_status(400, None).is_retryable());
        assert!(!http_status(404, None).is_retryable());
        assert!(!Error::Cancelled.is_retryable());
    }

    #[test]
    fn error_body_accepts_reason_alias() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"id":"resource.not.found","reason":"gone"}"#).unwrap();
        assert_eq!(body.id, "resource.not.found");
        assert_eq!(body.message, "gone");
    }

    #[test]
    fn display_includes_api_message() {
        let err = http_status(
            400,
            Some(ApiErrorBody {
                id: "invalid.input".to_string(),
                message: "name is required".to_string(),
            }),
        );
        assert_eq!(
            err.to_string(),
            "Request failed with status 400: name is required (invalid.input)"
        );
        assert_eq!(http_status(502, None).to_string(), "Request failed with status 502");
    }

    #[test]
    fn not_found_by_name_message() {
        let err = Error::NotFoundByName {
            resource: "server group",
            name: "Bar".to_string(),
        };
        assert_eq!(err.to_string(), "no server group named 'Bar' was found");
    }
}
