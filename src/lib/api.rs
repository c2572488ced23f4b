//! HTTP helpers for JSON APIs with consistent timeouts and error handling.
//! Feature clients use these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers hold no token state; the
//! bearer credential is supplied per call and never logged.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts JSON without credentials and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON with a bearer credential and parses a JSON response.
pub async fn post_json_with_bearer<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    access_token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = format!("Bearer {access_token}");
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with a bearer credential, used to revoke a session.
pub async fn post_empty_with_bearer(path: &str, access_token: &str) -> Result<(), AppError> {
    let url = build_url(path);
    let authorization = format!("Bearer {access_token}");
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Reads the error body and classifies the status into the error taxonomy.
async fn error_from_response(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_status(status, extract_message(&body))
}

/// Maps a non-success status to the error taxonomy. 401 is tagged distinctly
/// so callers can force a logout.
fn classify_status(status: u16, message: String) -> AppError {
    if status == 401 {
        AppError::Unauthorized(message)
    } else {
        AppError::Http { status, message }
    }
}

/// Prefers the server's JSON `message` field, falling back to the raw body so
/// proxy-generated HTML pages do not flood the UI.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|value| value.as_str()) {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return trimmed.chars().take(MAX_ERROR_CHARS).collect();
            }
        }
    }

    sanitize_body(body)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, classify_status, extract_message, sanitize_body};
    use crate::app_lib::AppError;

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.ensaluti.dev/", "/auth/login"),
            "https://api.ensaluti.dev/auth/login"
        );
        assert_eq!(build_url_with_base("", "/auth/login"), "/auth/login");
    }

    #[test]
    fn classify_tags_401_as_unauthorized() {
        assert_eq!(
            classify_status(401, "Token expired".to_string()),
            AppError::Unauthorized("Token expired".to_string())
        );
        assert_eq!(
            classify_status(400, "Invalid or expired OAuth code".to_string()),
            AppError::Http {
                status: 400,
                message: "Invalid or expired OAuth code".to_string()
            }
        );
    }

    #[test]
    fn extract_message_reads_server_message_field() {
        let body = r#"{"message":"Email already registered","status":409}"#;
        assert_eq!(extract_message(body), "Email already registered");
    }

    #[test]
    fn extract_message_falls_back_to_sanitized_body() {
        assert_eq!(extract_message("plain failure"), "plain failure");
        assert_eq!(extract_message(""), "Request failed.");
        assert_eq!(
            extract_message(r#"{"error":"no message field"}"#),
            r#"{"error":"no message field"}"#
        );
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long).len(), 200);
        assert_eq!(sanitize_body("  trimmed  "), "trimmed");
    }
}
