//! Shared HTTP client, auth headers, and error-body handling.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::error::{PictoraError, Result};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// No request timeout is set; image generation can legitimately take minutes
/// and deadlines are left to the caller.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for a Bearer-token API.
///
/// A key that cannot be carried in a header value is rejected rather than
/// dropped, so no request ever goes out unauthenticated.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
        PictoraError::InvalidArgument(
            "API key contains characters not allowed in an HTTP header".to_string(),
        )
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

/// Message for a failed response: the body text, else the status phrase,
/// else `HTTP <code>`.
pub fn remote_error_message(status: StatusCode, body: &str) -> String {
    if !body.is_empty() {
        return body.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("HTTP {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_headers_carry_key_and_json_content_type() {
        let headers = bearer_headers("sk-test").unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer sk-test");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn bearer_headers_reject_unencodable_key() {
        let err = bearer_headers("bad\nkey").unwrap_err();
        assert!(matches!(err, PictoraError::InvalidArgument(msg) if msg.contains("API key")));
    }

    #[test]
    fn error_message_prefers_body_text() {
        let message = remote_error_message(StatusCode::BAD_REQUEST, "{\"error\":\"quota\"}");
        assert_eq!(message, "{\"error\":\"quota\"}");
    }

    #[test]
    fn error_message_falls_back_to_status_phrase() {
        assert_eq!(
            remote_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn error_message_falls_back_to_status_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(remote_error_message(status, ""), "HTTP 599");
    }
}
