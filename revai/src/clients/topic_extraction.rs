//! Topic extraction client.

use super::insights::insights_payload;
use revai_core::execution::http::HeaderMap;
use revai_core::execution::url::QueryParams;
use revai_core::types::{InsightsInput, InsightsJobOptions, Job, TopicExtractionResult, Transcript};
use revai_core::{ApiClient, ApiClientBuilder, RevAiError};
use serde_json::Value;

pub const API_NAME: &str = "topic_extraction";
pub const API_VERSION: &str = "v1";

/// Client for `{host}/topic_extraction/v1/`.
///
/// Jobs take plain text or a transcript, never both.
#[derive(Debug, Clone)]
pub struct TopicExtractionClient {
    inner: ApiClient<Job, TopicExtractionResult>,
}

impl TopicExtractionClient {
    pub fn new(access_token: &str) -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token(access_token))
    }

    pub fn from_env() -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token_from_env())
    }

    pub fn with_builder(builder: ApiClientBuilder) -> Result<Self, RevAiError> {
        let inner = builder
            .api(API_NAME, API_VERSION)
            .build(Job::from_json, TopicExtractionResult::from_json)?;
        Ok(Self { inner })
    }

    pub fn api_client(&self) -> &ApiClient<Job, TopicExtractionResult> {
        &self.inner
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn default_headers(&self) -> &HeaderMap {
        self.inner.default_headers()
    }

    pub async fn submit_job(
        &self,
        input: InsightsInput,
        options: &InsightsJobOptions,
    ) -> Result<Job, RevAiError> {
        let payload = insights_payload(input, options)?;
        self.inner.submit_job(payload).await
    }

    pub async fn submit_job_from_text(
        &self,
        text: impl Into<String>,
        options: &InsightsJobOptions,
    ) -> Result<Job, RevAiError> {
        self.submit_job(InsightsInput::text(text), options).await
    }

    pub async fn submit_job_from_transcript(
        &self,
        transcript: Transcript,
        options: &InsightsJobOptions,
    ) -> Result<Job, RevAiError> {
        self.submit_job(InsightsInput::transcript(transcript), options)
            .await
    }

    pub async fn get_job_details(&self, id: &str) -> Result<Job, RevAiError> {
        self.inner.get_job_details(id).await
    }

    pub async fn get_list_of_jobs(
        &self,
        limit: Option<u32>,
        starting_after: Option<&str>,
    ) -> Result<Vec<Job>, RevAiError> {
        self.inner.get_list_of_jobs(limit, starting_after).await
    }

    /// `threshold` drops topics scoring below it.
    pub async fn get_result_json(
        &self,
        id: &str,
        threshold: Option<f64>,
    ) -> Result<Value, RevAiError> {
        self.inner
            .get_result_json(id, &threshold_query(threshold))
            .await
    }

    pub async fn get_result_object(
        &self,
        id: &str,
        threshold: Option<f64>,
    ) -> Result<TopicExtractionResult, RevAiError> {
        self.inner
            .get_result_object(id, &threshold_query(threshold))
            .await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), RevAiError> {
        self.inner.delete_job(id).await
    }
}

fn threshold_query(threshold: Option<f64>) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(threshold) = threshold {
        query.set("threshold", threshold.to_string());
    }
    query
}
