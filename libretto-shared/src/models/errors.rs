use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error payload returned by the catalog API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Human-readable description of what went wrong.
    pub detail: String,
}

/// Classified failures surfaced by the client.
///
/// Every operation boundary (list, save, delete, load-for-edit) converts
/// its failures into one of these variants before they reach the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field failed local validation; nothing reached the network.
    #[error("{0}")]
    Validation(String),

    /// The server rejected a previously valid token (HTTP 401).
    #[error("Your session has expired. Please login again.")]
    SessionExpired,

    /// Any other failed request, with a best-effort message.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code, when the failure came from a response.
        status: Option<u16>,
        /// Message extracted from the response, or a generic fallback.
        message: String,
    },

    /// A fallback lookup did not find the requested item.
    #[error("{0} not found in your collection")]
    NotFound(&'static str),
}

impl ApiError {
    /// Whether this failure should force the user back through login.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Failure for a request that never produced a response.
    #[must_use]
    pub fn transport(verb: &str) -> Self {
        Self::RequestFailed {
            status: None,
            message: format!("{verb} failed: unable to reach the server"),
        }
    }
}

fn extracted_message(body: &str) -> Option<String> {
    if let Ok(payload) = serde_json::from_str::<ErrorDetail>(body)
        && !payload.detail.trim().is_empty()
    {
        return Some(payload.detail);
    }
    let text = body.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Derive a user-facing message for a failed response body.
///
/// Tries the structured `{detail}` payload first, then the raw body text,
/// and finally falls back to a generic "`<verb> failed`".
#[must_use]
pub fn failure_message(verb: &str, body: &str) -> String {
    extracted_message(body).unwrap_or_else(|| format!("{verb} failed"))
}

/// Classify a failed login or register response.
///
/// Credential endpoints are not authenticated calls, so a 401 here means
/// bad credentials rather than an expired session; the generic fallback
/// carries the HTTP status instead.
#[must_use]
pub fn credential_failure(verb: &str, status: u16, body: &str) -> ApiError {
    ApiError::RequestFailed {
        status: Some(status),
        message: extracted_message(body).unwrap_or_else(|| format!("{verb} failed: {status}")),
    }
}

/// Classify a failed response into the error taxonomy.
///
/// 401 means the session is no longer valid and is kept distinct from
/// every other failure so callers can warn and force a logout.
#[must_use]
pub fn classify_response(verb: &str, status: u16, body: &str) -> ApiError {
    if status == 401 {
        ApiError::SessionExpired
    } else {
        ApiError::RequestFailed {
            status: Some(status),
            message: failure_message(verb, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_prefers_structured_detail() {
        let body = r#"{"detail":"Book already exists"}"#;
        assert_eq!(failure_message("save book", body), "Book already exists");
    }

    #[test]
    fn failure_message_ignores_blank_detail() {
        let body = r#"{"detail":"   "}"#;
        // Whitespace-only detail is useless; the raw body is next in line.
        assert_eq!(failure_message("save book", body), body.trim());
    }

    #[test]
    fn failure_message_falls_back_to_raw_text() {
        assert_eq!(
            failure_message("save book", "Internal Server Error"),
            "Internal Server Error"
        );
    }

    #[test]
    fn failure_message_falls_back_to_generic_verb() {
        assert_eq!(failure_message("delete quote", ""), "delete quote failed");
        assert_eq!(failure_message("delete quote", "  \n "), "delete quote failed");
    }

    #[test]
    fn classify_401_as_session_expired() {
        let error = classify_response("load books", 401, "");
        assert_eq!(error, ApiError::SessionExpired);
        assert!(error.is_session_expired());
    }

    #[test]
    fn classify_other_statuses_as_request_failed() {
        let error = classify_response("load books", 500, r#"{"detail":"boom"}"#);
        assert_eq!(
            error,
            ApiError::RequestFailed {
                status: Some(500),
                message: "boom".to_string(),
            }
        );
        assert!(!error.is_session_expired());
    }

    #[test]
    fn session_expired_distinct_from_server_error() {
        let expired = classify_response("load books", 401, "");
        let failed = classify_response("load books", 500, "");
        assert_ne!(expired, failed);
    }

    #[test]
    fn credential_failure_keeps_401_out_of_session_expiry() {
        let error = credential_failure("Login", 401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(
            error,
            ApiError::RequestFailed {
                status: Some(401),
                message: "Invalid credentials".to_string(),
            }
        );
        assert!(!error.is_session_expired());
    }

    #[test]
    fn credential_failure_fallback_carries_status() {
        let error = credential_failure("Login", 500, "");
        assert_eq!(
            error,
            ApiError::RequestFailed {
                status: Some(500),
                message: "Login failed: 500".to_string(),
            }
        );
    }

    #[test]
    fn transport_failure_has_no_status() {
        let error = ApiError::transport("load quotes");
        assert_eq!(
            error,
            ApiError::RequestFailed {
                status: None,
                message: "load quotes failed: unable to reach the server".to_string(),
            }
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            ApiError::Validation("Title and Author are required fields!".to_string()).to_string(),
            "Title and Author are required fields!"
        );
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Your session has expired. Please login again."
        );
        assert_eq!(
            ApiError::NotFound("Book").to_string(),
            "Book not found in your collection"
        );
    }

    #[test]
    fn error_detail_roundtrip() {
        let payload = ErrorDetail {
            detail: "Invalid credentials".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ErrorDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
