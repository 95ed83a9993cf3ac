//! Error types for calls against the shop REST backend.

use thiserror::Error;

/// Errors produced by a single resource-client call.
#[derive(Debug, Error)]
pub enum RestError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The configured base URL cannot carry REST paths.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The request never completed.
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx but the body is not what was expected.
    #[error("Unexpected response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl RestError {
    /// HTTP status for backend errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short error class for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            RestError::ClientBuild(_) => "client_build",
            RestError::InvalidBaseUrl(_) => "invalid_base_url",
            RestError::Transport { .. } => "transport",
            RestError::Status { .. } => "status",
            RestError::Decode { .. } => "decode",
        }
    }

    /// Message shown in the status line.
    pub fn user_message(&self) -> String {
        match self {
            RestError::Transport { .. } => {
                "Backend not reachable, the request was abandoned".to_string()
            }
            RestError::Status { status: 409, message } => {
                format!("Conflict, the record was changed meanwhile: {message}")
            }
            RestError::Status {
                status: 404,
                message,
            } => format!("Not found: {message}"),
            other => other.to_string(),
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Tries the `message` and `error` fields of a JSON body first, then the
/// plain text, then the canonical reason phrase.
pub(crate) fn backend_message(status: reqwest::StatusCode, body: &str) -> String {
    const MAX_LEN: usize = 200;

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(MAX_LEN).collect();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn message_from_json_error_field() {
        let msg = backend_message(StatusCode::BAD_REQUEST, r#"{"error": "Preis fehlt"}"#);
        assert_eq!(msg, "Preis fehlt");
    }

    #[test]
    fn message_from_plain_text() {
        let msg = backend_message(StatusCode::NOT_FOUND, "Kein Artikel mit der ID 99\n");
        assert_eq!(msg, "Kein Artikel mit der ID 99");
    }

    #[test]
    fn message_from_reason_phrase_when_body_empty() {
        let msg = backend_message(StatusCode::CONFLICT, "");
        assert_eq!(msg, "Conflict");
    }

    #[test]
    fn status_only_for_backend_errors() {
        let err = RestError::Status {
            status: 409,
            message: "stale".to_string(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.error_type(), "status");
        assert!(err.user_message().contains("stale"));

        let err = RestError::Status {
            status: 404,
            message: "Kein Artikel mit ID 999".to_string(),
        };
        assert_eq!(err.user_message(), "Not found: Kein Artikel mit ID 999");

        let err = RestError::InvalidBaseUrl("mailto:x".to_string());
        assert_eq!(err.status(), None);
    }
}
