//! Optional submission fields.
//!
//! Every field is an `Option`: `None` means the field is left out of the
//! request body, while `Some(0)` / `Some("")` are sent as given.

use super::transcript::Transcript;
use serde::{Deserialize, Serialize};

/// Fields accepted by every job submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOptions {
    /// Free-form string stored with the job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Webhook invoked when the job finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Seconds after completion before the job is deleted server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_after_seconds: Option<u64>,
}

impl JobOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    pub fn with_delete_after_seconds(mut self, seconds: u64) -> Self {
        self.delete_after_seconds = Some(seconds);
        self
    }
}

/// Options for text/transcript based insights jobs (sentiment, topics).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsJobOptions {
    #[serde(flatten)]
    pub job: JobOptions,
    /// Language of the submitted content, e.g. `en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl InsightsJobOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job_options(mut self, job: JobOptions) -> Self {
        self.job = job;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl From<JobOptions> for InsightsJobOptions {
    fn from(job: JobOptions) -> Self {
        Self {
            job,
            language: None,
        }
    }
}

/// Content of an insights submission: exactly one of `text` or `json` must be set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsInput {
    pub text: Option<String>,
    pub json: Option<Transcript>,
}

impl InsightsInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            json: None,
        }
    }

    pub fn transcript(transcript: Transcript) -> Self {
        Self {
            text: None,
            json: Some(transcript),
        }
    }
}
