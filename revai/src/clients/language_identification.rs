//! Language identification client.
//!
//! Jobs are submitted with a media URL or a local media file; results report
//! the most probable language and the per-language confidences.

use revai_core::execution::http::HeaderMap;
use revai_core::execution::payload::enhance_payload;
use revai_core::execution::url::QueryParams;
use revai_core::types::{Job, JobOptions, LanguageIdentificationResult};
use revai_core::{ApiClient, ApiClientBuilder, RevAiError};
use serde_json::{Map, Value};
use std::path::Path;

pub const API_NAME: &str = "languageid";
pub const API_VERSION: &str = "v1";

/// Client for `{host}/languageid/v1/`.
#[derive(Debug, Clone)]
pub struct LanguageIdentificationClient {
    inner: ApiClient<Job, LanguageIdentificationResult>,
}

impl LanguageIdentificationClient {
    pub fn new(access_token: &str) -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token(access_token))
    }

    pub fn from_env() -> Result<Self, RevAiError> {
        Self::with_builder(ApiClientBuilder::new().access_token_from_env())
    }

    /// The api name and version set on `builder` are overwritten.
    pub fn with_builder(builder: ApiClientBuilder) -> Result<Self, RevAiError> {
        let inner = builder
            .api(API_NAME, API_VERSION)
            .build(Job::from_json, LanguageIdentificationResult::from_json)?;
        Ok(Self { inner })
    }

    pub fn api_client(&self) -> &ApiClient<Job, LanguageIdentificationResult> {
        &self.inner
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn default_headers(&self) -> &HeaderMap {
        self.inner.default_headers()
    }

    /// Submit media the service downloads from `media_url`.
    pub async fn submit_job_url(
        &self,
        media_url: &str,
        options: &JobOptions,
    ) -> Result<Job, RevAiError> {
        if media_url.is_empty() {
            return Err(RevAiError::invalid_argument("media_url must be provided"));
        }
        let mut payload = Map::new();
        payload.insert("media_url".to_string(), Value::from(media_url));
        self.inner
            .submit_job(enhance_payload(payload, options))
            .await
    }

    /// Upload a local media file. Options travel in the multipart `options` part.
    pub async fn submit_job_local_file(
        &self,
        path: impl AsRef<Path>,
        options: &JobOptions,
    ) -> Result<Job, RevAiError> {
        self.inner
            .submit_job_with_file(path, enhance_payload(Map::new(), options))
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

    pub async fn get_result_json(&self, id: &str) -> Result<Value, RevAiError> {
        self.inner.get_result_json(id, &QueryParams::new()).await
    }

    pub async fn get_result_object(
        &self,
        id: &str,
    ) -> Result<LanguageIdentificationResult, RevAiError> {
        self.inner.get_result_object(id, &QueryParams::new()).await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), RevAiError> {
        self.inner.delete_job(id).await
    }
}
