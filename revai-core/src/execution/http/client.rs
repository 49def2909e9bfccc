//! HTTP client builder utilities

use crate::error::RevAiError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from `HttpConfig`.
///
/// Only connection-level settings (timeouts, proxy) are applied here. Headers
/// and the user agent are owned by `ApiClient` so that they are visible to
/// every transport, not just this one.
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, RevAiError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| RevAiError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| RevAiError::ConfigurationError(format!("Failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_http_client_default() {
        let config = HttpConfig::default();
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_timeout() {
        let config = HttpConfig {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            ..Default::default()
        };
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_invalid_proxy() {
        let config = HttpConfig {
            proxy: Some("http://[::1".to_string()),
            ..Default::default()
        };
        let err = build_http_client_from_config(&config).unwrap_err();
        assert!(matches!(err, RevAiError::ConfigurationError(_)));
    }
}
