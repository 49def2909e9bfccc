//! Type Conversions for RevAiError
//!
//! This module contains From trait implementations for converting
//! common error types into RevAiError.

use super::types::RevAiError;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for RevAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::ConfigurationError(err.to_string())
        } else {
            Self::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RevAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RevAiError = json_err.into();
        assert!(matches!(err, RevAiError::DeserializationError(_)));
    }
}
