//! HTTP error classification.
//!
//! Maps a non-2xx response to the library error taxonomy while keeping the
//! server's message and body.

use crate::error::RevAiError;

/// Pull a human-readable message out of an error body.
///
/// Rev AI bodies are problem-details style (`title`, `detail`); older
/// endpoints use `message` or `error`.
fn extract_message(body_text: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body_text).ok()?;

    let title = json.get("title").and_then(|v| v.as_str());
    let detail = json.get("detail").and_then(|v| v.as_str());
    let message = match (title, detail) {
        (Some(t), Some(d)) if !d.trim().is_empty() => format!("{}: {}", t.trim(), d.trim()),
        (Some(t), _) => t.trim().to_string(),
        (None, Some(d)) => d.trim().to_string(),
        (None, None) => json
            .get("message")
            .and_then(|v| v.as_str())
            .or_else(|| json.get("error").and_then(|v| v.as_str()))
            .map(|s| s.trim().to_string())?,
    };

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Classify an HTTP failure.
///
/// `job_id` is set for per-job endpoints; a 404 there becomes
/// [`RevAiError::JobNotFound`].
pub fn classify_http_error(status: u16, body_text: &str, job_id: Option<&str>) -> RevAiError {
    if status == 404
        && let Some(id) = job_id
    {
        return RevAiError::JobNotFound {
            id: id.to_string(),
            body: body_text.to_string(),
        };
    }

    let message = extract_message(body_text)
        .or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {status}"));

    RevAiError::http_error(status, message, body_text)
}
