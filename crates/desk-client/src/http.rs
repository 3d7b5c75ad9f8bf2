//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401, 403, other non-success) and JSON
//! decoding so the endpoint modules stay focused on request construction.

use desk_core::responses::ErrorBody;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Otherwise the backend's
/// `{ message }` or `{ error }` body becomes the error message, falling back
/// to the raw body and then to the status text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    Err(match status.as_u16() {
        401 => ApiError::Unauthorized(message),
        403 => ApiError::Forbidden(message),
        code => ApiError::Api {
            status: code,
            message,
        },
    })
}

/// Decode a JSON body, naming the expected type on failure.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Parse(format!("{}: {e}", std::any::type_name::<T>())))
}

fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.into_message() {
            return Some(message);
        }
    }
    let trimmed = body.trim();
    (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
}
