//! Language identification results.

use super::wire::from_json_value;
use crate::error::RevAiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfidence {
    pub language: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageIdentificationResult {
    pub top_language: String,
    #[serde(default)]
    pub language_confidences: Vec<LanguageConfidence>,
}

impl LanguageIdentificationResult {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RevAiError> {
        from_json_value(value)
    }

    /// Confidence reported for `language`, if it was scored.
    pub fn confidence_for(&self, language: &str) -> Option<f64> {
        self.language_confidences
            .iter()
            .find(|c| c.language == language)
            .map(|c| c.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_confidences_in_order() {
        let result = LanguageIdentificationResult::from_json(&json!({
            "top_language": "en",
            "language_confidences": [
                {"language": "en", "confidence": 0.907},
                {"language": "nl", "confidence": 0.023}
            ]
        }))
        .unwrap();
        assert_eq!(result.top_language, "en");
        assert_eq!(result.language_confidences[1].language, "nl");
        assert_eq!(result.confidence_for("en"), Some(0.907));
        assert_eq!(result.confidence_for("fr"), None);
    }
}
