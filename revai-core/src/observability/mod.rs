//! Logging helpers.
//!
//! The client emits `tracing` events for every request; installing a
//! subscriber is up to the application. [`init_tracing`] is a convenience for
//! binaries and examples that just want formatted output.

use crate::error::RevAiError;
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Mask a credential so it can be logged.
pub fn mask_sensitive_value(value: &str) -> String {
    if let Some(token) = value.strip_prefix("Bearer ") {
        if token.chars().count() > 8 {
            return format!("Bearer {}", keep_ends(token, 4, 4));
        }
        return "Bearer ***".to_string();
    }
    if value.chars().count() > 16 {
        keep_ends(value, 6, 4)
    } else {
        value.to_string()
    }
}

/// `head...tail`, counted in chars. Callers ensure `value` is longer than `head + tail`.
fn keep_ends(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

/// Render headers as JSON with credentials masked.
pub fn format_headers_for_logging(headers: &HeaderMap) -> String {
    let map: BTreeMap<&str, String> = headers
        .iter()
        .map(|(k, v)| {
            let value = v.to_str().unwrap_or("<invalid>");
            let name = k.as_str();
            let masked = if name.contains("authorization") || name.contains("token") {
                mask_sensitive_value(value)
            } else {
                value.to_string()
            };
            (name, masked)
        })
        .collect();
    serde_json::to_string(&map).unwrap_or_else(|_| format!("{map:?}"))
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, or by
/// `default_directive` when `RUST_LOG` is unset.
pub fn init_tracing(default_directive: &str) -> Result<(), RevAiError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| RevAiError::ConfigurationError(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue, USER_AGENT};

    #[test]
    fn bearer_tokens_are_masked() {
        assert_eq!(
            mask_sensitive_value("Bearer 02abcdefghij1234"),
            "Bearer 02ab...1234"
        );
        assert_eq!(mask_sensitive_value("Bearer token"), "Bearer ***");
    }

    #[test]
    fn non_ascii_values_are_masked_by_char() {
        assert_eq!(
            mask_sensitive_value("Bearer aéééééééé"),
            "Bearer aééé...éééé"
        );
        assert_eq!(
            mask_sensitive_value("ключ-доступа-секрет"),
            "ключ-д...крет"
        );
    }

    #[test]
    fn second_init_reports_configuration_error() {
        // The first call may lose the race to another test's subscriber.
        let _ = init_tracing("revai_core=debug");
        let err = init_tracing("revai_core=debug").unwrap_err();
        assert!(matches!(err, RevAiError::ConfigurationError(ref m) if m.contains("subscriber")));
    }

    #[test]
    fn header_dump_hides_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer short"));
        headers.insert(USER_AGENT, HeaderValue::from_static("RevAi-RustSDK/0.3.0"));
        let rendered = format_headers_for_logging(&headers);
        assert!(rendered.contains("Bearer ***"));
        assert!(rendered.contains("RevAi-RustSDK/0.3.0"));
        assert!(!rendered.contains("short"));
    }
}
