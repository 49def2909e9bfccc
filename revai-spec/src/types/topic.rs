//! Topic extraction results.

use super::wire::from_json_value;
use crate::error::RevAiError;
use serde::{Deserialize, Serialize};

/// A span of the input that supports a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Informant {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_name: String,
    pub score: f64,
    #[serde(default)]
    pub informants: Vec<Informant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicExtractionResult {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl TopicExtractionResult {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RevAiError> {
        from_json_value(value)
    }
}
