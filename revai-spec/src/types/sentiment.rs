//! Sentiment analysis results.

use super::wire::{from_json_value, wire_enum};
use crate::error::RevAiError;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Polarity of a sentiment message; also used as the `filter_for` query value.
    pub enum SentimentValue {
        Positive => "positive",
        Neutral => "neutral",
        Negative => "negative",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentMessage {
    pub content: String,
    pub score: f64,
    pub sentiment: SentimentValue,
    /// Character offset of `content` in the submitted text.
    pub offset: u64,
    pub length: u64,
}

impl SentimentMessage {
    pub fn new(
        content: impl Into<String>,
        score: f64,
        sentiment: SentimentValue,
        offset: u64,
        length: u64,
    ) -> Self {
        Self {
            content: content.into(),
            score,
            sentiment,
            offset,
            length,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysisResult {
    #[serde(default)]
    pub messages: Vec<SentimentMessage>,
}

impl SentimentAnalysisResult {
    /// Result deserializer used by the generic client.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RevAiError> {
        from_json_value(value)
    }

    pub fn with_sentiment(
        &self,
        sentiment: SentimentValue,
    ) -> impl Iterator<Item = &SentimentMessage> + '_ {
        self.messages
            .iter()
            .filter(move |m| m.sentiment == sentiment)
    }
}
