//! HTTP helpers for the account API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup; bearer tokens are attached per call and never stored here.

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

/// Fetches JSON, attaching the bearer token when one is provided.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = token.map(bearer_header);
    let response = send_with_timeout(|signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));
        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }
        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts a JSON payload and parses a JSON response, attaching the bearer
/// token when one is provided.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let bearer = token.map(bearer_header);
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));
        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }
        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts a form-encoded body and parses a JSON response. The credential
/// exchange endpoint expects `application/x-www-form-urlencoded`.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, String)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = encode_form(fields)?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body and parses a JSON response, attaching the bearer
/// token when one is provided. Used for trigger-style endpoints.
pub async fn post_empty<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let bearer = token.map(bearer_header);
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url).abort_signal(Some(signal));
        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }
        builder
            .body("")
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
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

/// Encodes form fields through the browser's own serializer.
fn encode_form(fields: &[(&str, String)]) -> Result<String, AppError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| AppError::Serialization("Failed to encode form body.".to_string()))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(String::from(params.to_string()))
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

/// Parses JSON responses and surfaces HTTP errors with the server's `detail`
/// message when the body carries one.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_detail(&body).unwrap_or_else(|| sanitize_body(body));
        Err(AppError::Http { status, message })
    }
}

/// Pulls the `detail` field out of a JSON error body, if present.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, extract_detail, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("/api", "/auth/login/token"),
            "/api/auth/login/token"
        );
        assert_eq!(
            build_url_with_base("https://realms.example/api/", "auth/users/me"),
            "https://realms.example/api/auth/users/me"
        );
        assert_eq!(build_url_with_base("", "/auth/register"), "/auth/register");
    }

    #[test]
    fn extract_detail_reads_json_error_bodies() {
        assert_eq!(
            extract_detail(r#"{"detail":"Username already registered"}"#),
            Some("Username already registered".to_string())
        );
        assert_eq!(extract_detail(r#"{"detail":42}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("  ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" oops ".to_string()), "oops");
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
