use crate::domain::{
    errors::{ApiError, ApiErrorKind},
    logging::{LogComponent, LogLevel, get_logger},
};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod fund_api_client;

pub use fund_api_client::MutualFundApiClient;

/// JSON HTTP client on top of gloo for WASM
#[derive(Clone)]
pub struct GlooHttpClient {
    base_url: String,
    default_headers: HashMap<String, String>,
}

impl GlooHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint relative to the base URL
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET returning the raw body of a successful response
    pub async fn get(&self, url: &str) -> Result<String, ApiError> {
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 GET: {}", url));

        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to reach the server: {e}")))?;

        Self::read_success_body(response).await
    }

    /// POST with a JSON body, returning the raw body of a successful response
    pub async fn post_json<T>(&self, url: &str, body: &T) -> Result<String, ApiError>
    where
        T: Serialize,
    {
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 POST: {}", url));

        let mut request = Request::post(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .map_err(|e| ApiError::decode(format!("Failed to encode request body: {e}")))?
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to reach the server: {e}")))?;

        Self::read_success_body(response).await
    }

    async fn read_success_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await;

        if !response.ok() {
            let text = body.unwrap_or_default();
            let error = error_from_response(status, &response.status_text(), &text);
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("HTTP"),
                &format!("HTTP error: {}", error.message()),
                &format!("status={} kind={}", status, error.kind()),
            );
            return Err(error);
        }

        let text = success_body(body)?;
        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("✅ Response: {} bytes", text.len()),
        );
        Ok(text)
    }
}

/// Body of a successful response, or a decode error naming why it could not be
/// read.
fn success_body<E: std::fmt::Display>(body: Result<String, E>) -> Result<String, ApiError> {
    body.map_err(|e| ApiError::decode(format!("Failed to read response body: {e}")))
}

/// Error payload sent by the API on failure.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

/// Build an [`ApiError`] from a failed response.
///
/// The kind comes from the body's `code` when the client knows it, then from
/// the message text, then from the status. The message prefers `message`,
/// then `error`, then a plain-text body, then the status line.
pub fn error_from_response(status: u16, status_text: &str, body: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let parsed_ok = parsed.is_some();
    let parsed = parsed.unwrap_or_default();
    let code = parsed.code.as_deref().and_then(ApiErrorKind::from_code);

    let message = parsed
        .message
        .into_iter()
        .chain(parsed.error)
        .find(|m| !m.trim().is_empty())
        .or_else(|| {
            let text = body.trim();
            (!parsed_ok && !text.is_empty()).then(|| text.to_string())
        })
        .unwrap_or_else(|| format!("Request failed: {} {}", status, status_text).trim_end().to_string());

    let kind = code
        .or_else(|| ApiErrorKind::from_message(&message))
        .unwrap_or_else(|| ApiErrorKind::from_status(status));

    ApiError::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = GlooHttpClient::new("http://localhost:5000/api/");
        assert_eq!(client.endpoint_url("/auth/register"), "http://localhost:5000/api/auth/register");
    }

    #[test]
    fn code_wins_over_status() {
        let err = error_from_response(400, "Bad Request", r#"{"code":"duplicate","message":"User already exists"}"#);
        assert_eq!(err.kind(), ApiErrorKind::AlreadyExists);
        assert_eq!(err.message(), "User already exists");
    }

    #[test]
    fn status_used_when_code_unknown() {
        let err = error_from_response(409, "Conflict", r#"{"code":"E1042","error":"Email taken"}"#);
        assert_eq!(err.kind(), ApiErrorKind::AlreadyExists);
        assert_eq!(err.message(), "Email taken");
    }

    #[test]
    fn message_text_wins_over_status_without_code() {
        let err = error_from_response(400, "Bad Request", r#"{"message":"User already exists"}"#);
        assert_eq!(err.kind(), ApiErrorKind::AlreadyExists);

        let err = error_from_response(500, "Internal Server Error", r#"{"message":"validation failed: email"}"#);
        assert_eq!(err.kind(), ApiErrorKind::Validation);
    }

    #[test]
    fn known_code_wins_over_message_text() {
        let err = error_from_response(400, "Bad Request", r#"{"code":"validation","message":"duplicate field"}"#);
        assert_eq!(err.kind(), ApiErrorKind::Validation);
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let err = error_from_response(502, "Bad Gateway", "upstream timed out\n");
        assert_eq!(err.kind(), ApiErrorKind::Server);
        assert_eq!(err.message(), "upstream timed out");
    }

    #[test]
    fn unreadable_success_body_is_a_decode_error() {
        let err = success_body(Err::<String, _>("stream aborted")).unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Decode);
        assert_eq!(err.message(), "Failed to read response body: stream aborted");
        assert_eq!(success_body::<&str>(Ok("[]".to_string())).unwrap(), "[]");
    }

    #[test]
    fn empty_body_falls_back_to_status_line() {
        let err = error_from_response(404, "Not Found", "");
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
        assert_eq!(err.message(), "Request failed: 404 Not Found");
    }
}
