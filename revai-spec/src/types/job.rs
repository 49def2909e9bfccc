//! Job records.

use super::wire::{from_json_value, wire_enum};
use crate::error::RevAiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle status of a server-side job.
    pub enum JobStatus {
        Created => "created",
        InProgress => "in_progress",
        Transcribing => "transcribing",
        /// The transcription API reports this state as `transcribed`.
        Complete => "completed" | "transcribed",
        Failed => "failed",
    }
}

impl JobStatus {
    /// Whether the job will not change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Complete | JobStatus::Failed)
    }
}

wire_enum! {
    /// Kind of work a job performs, reported as `type` on the wire.
    pub enum JobType {
        Async => "async",
        SentimentAnalysis => "sentiment_analysis",
        TopicExtraction => "topic_extraction",
        LanguageId => "language_id",
    }
}

/// A job as reported by the server.
///
/// Jobs are never mutated client-side; poll with `get_job_details` to obtain a
/// fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    pub created_on: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_after_seconds: Option<u64>,
    #[serde(rename = "failure", default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_detail: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_duration_seconds: Option<f64>,
}

impl Job {
    /// Minimal job with only the required fields set.
    pub fn new(id: impl Into<String>, created_on: DateTime<Utc>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            created_on,
            completed_on: None,
            metadata: None,
            callback_url: None,
            delete_after_seconds: None,
            failure_reason: None,
            failure_detail: None,
            job_type: None,
            language: None,
            word_count: None,
            processed_duration_seconds: None,
        }
    }

    /// Job deserializer used by the generic client.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, RevAiError> {
        from_json_value(value)
    }
}
