//! Sentiment analysis client.
//!
//! Jobs are submitted with plain text or a transcript; results list the
//! sentiment-bearing messages found, optionally filtered to one sentiment.

use super::insights::insights_payload;
use revai_core::execution::http::HeaderMap;
use revai_core::execution::url::QueryParams;
use revai_core::types::{
    InsightsInput, InsightsJobOptions, Job, SentimentAnalysisResult, SentimentValue, Transcript,
};
use revai_core::{ApiClient, ApiClientBuilder, RevAiError};
use serde_json::Value;

pub const API_NAME: &str = "sentiment_analysis";
pub const API_VERSION: &str = "v1";

/// Client for `{host}/sentiment_analysis/v1/`.
#[derive(Debug, Clone)]
pub struct SentimentAnalysisClient {
    inner: ApiClient<Job, SentimentAnalysisResult>,
}

impl SentimentAnalysisClient {
    /// Client against the public API host.
    pub fn new(access_token: &str) -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token(access_token))
    }

    /// Client using the token in `REVAI_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token_from_env())
    }

    /// Client from a pre-configured builder (host, HTTP config, transport).
    /// The api name and version are always overwritten.
    pub fn with_builder(builder: ApiClientBuilder) -> Result<Self, RevAiError> {
        let inner = builder
            .api(API_NAME, API_VERSION)
            .build(Job::from_json, SentimentAnalysisResult::from_json)?;
        Ok(Self { inner })
    }

    pub fn api_client(&self) -> &ApiClient<Job, SentimentAnalysisResult> {
        &self.inner
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn default_headers(&self) -> &HeaderMap {
        self.inner.default_headers()
    }

    /// Submit a sentiment analysis job for `input`.
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

    /// Raw result body. When several filter values are given the last one is sent.
    pub async fn get_result_json(
        &self,
        id: &str,
        filter_for: impl IntoIterator<Item = SentimentValue>,
    ) -> Result<Value, RevAiError> {
        self.inner.get_result_json(id, &filter_query(filter_for)).await
    }

    pub async fn get_result_object(
        &self,
        id: &str,
        filter_for: impl IntoIterator<Item = SentimentValue>,
    ) -> Result<SentimentAnalysisResult, RevAiError> {
        self.inner
            .get_result_object(id, &filter_query(filter_for))
            .await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), RevAiError> {
        self.inner.delete_job(id).await
    }
}

fn filter_query(filter_for: impl IntoIterator<Item = SentimentValue>) -> QueryParams {
    let mut query = QueryParams::new();
    for sentiment in filter_for {
        query.set("filter_for", sentiment.as_str());
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_targets_sentiment_api() {
        let client = SentimentAnalysisClient::new("token").unwrap();
        assert_eq!(client.base_url(), "https://api.rev.ai/sentiment_analysis/v1/");
        assert_eq!(client.api_client().api_name(), API_NAME);
    }

    #[test]
    fn builder_api_segments_are_overwritten() {
        let client = SentimentAnalysisClient::with_builder(
            ApiClientBuilder::new()
                .access_token("token")
                .api("languageid", "v9")
                .host_url("http://localhost:8080"),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/sentiment_analysis/v1/");
    }

    #[test]
    fn no_filter_means_empty_query() {
        assert!(filter_query(None::<SentimentValue>).is_empty());
    }

    #[test]
    fn last_filter_value_wins() {
        let query = filter_query([SentimentValue::Positive, SentimentValue::Negative]);
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("filter_for"), Some("negative"));
    }

    #[tokio::test]
    async fn invalid_input_fails_before_any_request() {
        // Unroutable host: a request would surface as a transport error.
        let client = SentimentAnalysisClient::with_builder(
            ApiClientBuilder::new()
                .access_token("token")
                .host_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let err = client
            .submit_job_from_text("", &InsightsJobOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, RevAiError::InvalidArgument("text must be provided".into()));

        let err = client.get_result_json("", None::<SentimentValue>).await.unwrap_err();
        assert_eq!(err, RevAiError::InvalidArgument("id must be provided".into()));
    }
}
