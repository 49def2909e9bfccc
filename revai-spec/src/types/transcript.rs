//! Transcript input structures.
//!
//! A [`Transcript`] owns an ordered list of [`Monologue`]s, each of which owns
//! an ordered list of timed [`Element`]s. These are accepted as submission
//! input by the insights clients in place of raw text.

use super::wire::{from_json_value, wire_enum};
use crate::error::RevAiError;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Kind of a transcript element.
    pub enum ElementType {
        Text => "text",
        Punct => "punct",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Element {
    /// A timed text element.
    pub fn text(value: impl Into<String>, ts: f64, end_ts: f64, confidence: f64) -> Self {
        Self {
            element_type: ElementType::Text,
            value: value.into(),
            ts: Some(ts),
            end_ts: Some(end_ts),
            confidence: Some(confidence),
        }
    }

    /// An untimed punctuation element.
    pub fn punct(value: impl Into<String>) -> Self {
        Self {
            element_type: ElementType::Punct,
            value: value.into(),
            ts: None,
            end_ts: None,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monologue {
    pub speaker: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_name: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Monologue {
    pub fn new(speaker: u32, elements: Vec<Element>) -> Self {
        Self {
            speaker,
            speaker_name: None,
            elements,
        }
    }

    pub fn with_speaker_name(mut self, name: impl Into<String>) -> Self {
        self.speaker_name = Some(name.into());
        self
    }

    /// Concatenated element values, in order.
    pub fn text(&self) -> String {
        self.elements.iter().map(|e| e.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub monologues: Vec<Monologue>,
}

impl Transcript {
    pub fn new(monologues: Vec<Monologue>) -> Self {
        Self { monologues }
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, RevAiError> {
        from_json_value(value)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, RevAiError> {
        Ok(serde_json::to_value(self)?)
    }
}
