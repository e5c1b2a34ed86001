//! Shared HTTP client and status-to-error mapping.

use std::sync::OnceLock;

use crate::error::SkycastError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
///
/// Individual calls set their own per-request timeouts; this only caps the
/// absolute worst case.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-success HTTP status to an error, pulling the provider's own
/// `message` field out of the body when it parses as JSON.
pub fn status_to_error(status: u16, body: &str) -> SkycastError {
    let message = extract_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        }
    });

    match status {
        401 | 403 => SkycastError::Authentication(message),
        _ => SkycastError::api(status, message),
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    // OpenWeather: {"cod": "404", "message": "..."}
    // Gemini:      {"error": {"message": "..."}}
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}
