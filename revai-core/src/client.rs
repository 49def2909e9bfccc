//! Generic API client.
//!
//! [`ApiClient`] owns everything a Rev AI job API has in common: the base URL
//! derived from api name/version, the fixed auth/user-agent headers, and the
//! submit / poll / fetch-result / delete request pipeline. What differs per
//! API is supplied as two plain functions: one turning a response body into
//! the API's job type `J`, one turning a result body into its result type `R`.

use crate::defaults;
use crate::error::RevAiError;
use crate::execution::errors::classify_http_error;
use crate::execution::http::{
    HttpHeaderBuilder, HttpTransport, HttpTransportRequest, HttpTransportResponse, MultipartPart,
    ReqwestTransport, TransportBody,
};
use crate::execution::payload::to_sorted_json;
use crate::execution::url::{QueryParams, join_url, with_query};
use crate::observability::format_headers_for_logging;
use crate::types::HttpConfig;
use crate::utils::mime::guess_mime;
use reqwest::Method;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Maps a job response body to the API's job type.
pub type JobDeserializer<J> = fn(&Value) -> Result<J, RevAiError>;

/// Maps a result response body to the API's result type.
pub type ResultDeserializer<R> = fn(&Value) -> Result<R, RevAiError>;

/// Request/response pipeline shared by every concrete client.
///
/// Immutable after construction; cloning is cheap and clones share the
/// transport.
pub struct ApiClient<J, R> {
    api_name: String,
    base_url: String,
    default_headers: HeaderMap,
    transport: Arc<dyn HttpTransport>,
    job_deserializer: JobDeserializer<J>,
    result_deserializer: ResultDeserializer<R>,
}

impl<J, R> Clone for ApiClient<J, R> {
    fn clone(&self) -> Self {
        Self {
            api_name: self.api_name.clone(),
            base_url: self.base_url.clone(),
            default_headers: self.default_headers.clone(),
            transport: self.transport.clone(),
            job_deserializer: self.job_deserializer,
            result_deserializer: self.result_deserializer,
        }
    }
}

impl<J, R> fmt::Debug for ApiClient<J, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_name", &self.api_name)
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

fn ensure_id(id: &str) -> Result<(), RevAiError> {
    if id.is_empty() {
        return Err(RevAiError::invalid_argument("id must be provided"));
    }
    Ok(())
}

async fn read_media_file(path: &Path) -> Result<Vec<u8>, RevAiError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(RevAiError::FileNotFound(path.display().to_string()))
        }
        Err(e) => Err(RevAiError::IoError(format!("{}: {e}", path.display()))),
    }
}

impl ApiClient<(), ()> {
    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }
}

impl<J, R> ApiClient<J, R> {
    /// Build a client against the public API host with default HTTP settings.
    pub fn new(
        access_token: &str,
        api_name: &str,
        api_version: &str,
        job_deserializer: JobDeserializer<J>,
        result_deserializer: ResultDeserializer<R>,
    ) -> Result<Self, RevAiError> {
        ApiClientBuilder::new()
            .access_token(access_token)
            .api(api_name, api_version)
            .build(job_deserializer, result_deserializer)
    }

    /// `<host>/<api_name>/<api_version>/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    fn jobs_url(&self) -> String {
        join_url(&self.base_url, "jobs")
    }

    fn job_url(&self, id: &str) -> String {
        join_url(
            &self.base_url,
            &format!("jobs/{}", urlencoding::encode(id)),
        )
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: TransportBody,
        job_id: Option<&str>,
    ) -> Result<HttpTransportResponse, RevAiError> {
        let started = Instant::now();
        debug!(
            api = %self.api_name,
            method = %method,
            url = %url,
            headers = %format_headers_for_logging(&self.default_headers),
            "Request started"
        );

        let request = HttpTransportRequest {
            method: method.clone(),
            url: url.clone(),
            headers: self.default_headers.clone(),
            body,
        };
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(api = %self.api_name, method = %method, url = %url, error = %e, "Request failed before a response");
                return Err(e);
            }
        };

        let duration_ms = started.elapsed().as_millis();
        if !response.is_success() {
            let body_text = response.text();
            warn!(
                api = %self.api_name,
                method = %method,
                url = %url,
                status_code = response.status,
                duration_ms = duration_ms,
                error_text = %body_text,
                "Request failed"
            );
            return Err(classify_http_error(response.status, &body_text, job_id));
        }

        debug!(
            api = %self.api_name,
            method = %method,
            url = %url,
            status_code = response.status,
            duration_ms = duration_ms,
            response_length = response.body.len(),
            "Request completed"
        );
        Ok(response)
    }

    async fn send_json(
        &self,
        method: Method,
        url: String,
        body: TransportBody,
        job_id: Option<&str>,
    ) -> Result<Value, RevAiError> {
        self.send(method, url, body, job_id).await?.json()
    }

    /// POST `{base}jobs` with `payload` as the JSON body.
    pub async fn submit_job(&self, payload: Map<String, Value>) -> Result<J, RevAiError> {
        let json = self
            .send_json(
                Method::POST,
                self.jobs_url(),
                TransportBody::Json(Value::Object(payload)),
                None,
            )
            .await?;
        (self.job_deserializer)(&json)
    }

    /// Multipart POST `{base}jobs` with a `media` part holding the file and an
    /// `options` part holding `payload` as key-sorted JSON text.
    ///
    /// The file is read completely and closed before the request is sent.
    /// The part's file name is the last component of `path` (`/data/a.mp3`
    /// is sent as `a.mp3`), not the path as given.
    pub async fn submit_job_with_file(
        &self,
        path: impl AsRef<Path>,
        payload: Map<String, Value>,
    ) -> Result<J, RevAiError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(RevAiError::invalid_argument("filename must be provided"));
        }

        let data = read_media_file(path).await?;
        let path_text = path.display().to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path_text.clone());
        let content_type = guess_mime(&data, &path_text);
        let options = to_sorted_json(&payload)?;

        let parts = vec![
            MultipartPart::file("media", file_name, content_type, data),
            MultipartPart::text("options", options),
        ];
        let json = self
            .send_json(
                Method::POST,
                self.jobs_url(),
                TransportBody::Multipart(parts),
                None,
            )
            .await?;
        (self.job_deserializer)(&json)
    }

    /// GET `{base}jobs/{id}`.
    pub async fn get_job_details(&self, id: &str) -> Result<J, RevAiError> {
        ensure_id(id)?;
        let json = self
            .send_json(Method::GET, self.job_url(id), TransportBody::Empty, Some(id))
            .await?;
        (self.job_deserializer)(&json)
    }

    /// GET `{base}jobs`, most recent first.
    ///
    /// `limit` caps the page size; `starting_after` is the id of the job after
    /// which the page begins.
    pub async fn get_list_of_jobs(
        &self,
        limit: Option<u32>,
        starting_after: Option<&str>,
    ) -> Result<Vec<J>, RevAiError> {
        let mut params = QueryParams::new();
        if let Some(limit) = limit {
            params.set("limit", limit.to_string());
        }
        if let Some(starting_after) = starting_after {
            params.set("starting_after", starting_after);
        }
        let url = if params.is_empty() {
            self.jobs_url()
        } else {
            with_query(&self.jobs_url(), &params)
        };

        let json = self
            .send_json(Method::GET, url, TransportBody::Empty, None)
            .await?;
        let items = json.as_array().ok_or_else(|| {
            RevAiError::DeserializationError("expected a JSON array of jobs".to_string())
        })?;
        items.iter().map(self.job_deserializer).collect()
    }

    /// GET `{base}jobs/{id}/result?<query>` and return the decoded body as-is.
    pub async fn get_result_json(
        &self,
        id: &str,
        query: &QueryParams,
    ) -> Result<Value, RevAiError> {
        ensure_id(id)?;
        let url = with_query(&join_url(&self.job_url(id), "result"), query);
        self.send_json(Method::GET, url, TransportBody::Empty, Some(id))
            .await
    }

    /// Same request as [`Self::get_result_json`], passed through the result deserializer.
    pub async fn get_result_object(&self, id: &str, query: &QueryParams) -> Result<R, RevAiError> {
        let json = self.get_result_json(id, query).await?;
        (self.result_deserializer)(&json)
    }

    /// DELETE `{base}jobs/{id}`. Any response body is ignored.
    pub async fn delete_job(&self, id: &str) -> Result<(), RevAiError> {
        ensure_id(id)?;
        self.send(Method::DELETE, self.job_url(id), TransportBody::Empty, Some(id))
            .await?;
        Ok(())
    }
}

/// Builder for [`ApiClient`].
///
/// Concrete clients set the api name/version themselves, so callers usually
/// only touch the token, host, HTTP config, or transport.
pub struct ApiClientBuilder {
    access_token: Option<SecretString>,
    api_name: Option<String>,
    api_version: Option<String>,
    host_url: String,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            access_token: None,
            api_name: None,
            api_version: None,
            host_url: defaults::API_HOST.to_string(),
            http_config: HttpConfig::default(),
            http_client: None,
            transport: None,
        }
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Read the token from `REVAI_ACCESS_TOKEN`. Leaves the token unset when
    /// the variable is missing, so `build` reports it.
    pub fn access_token_from_env(mut self) -> Self {
        if let Ok(token) = std::env::var(defaults::ACCESS_TOKEN_ENV) {
            self.access_token = Some(SecretString::from(token));
        }
        self
    }

    /// Set the api name and version path segments.
    pub fn api(mut self, api_name: impl Into<String>, api_version: impl Into<String>) -> Self {
        self.api_name = Some(api_name.into());
        self.api_version = Some(api_version.into());
        self
    }

    /// Override the service root (default `https://api.rev.ai/`).
    pub fn host_url(mut self, host_url: impl Into<String>) -> Self {
        self.host_url = host_url.into();
        self
    }

    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Use a pre-configured `reqwest::Client` for the default transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the transport entirely. Takes precedence over `http_client`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build<J, R>(
        self,
        job_deserializer: JobDeserializer<J>,
        result_deserializer: ResultDeserializer<R>,
    ) -> Result<ApiClient<J, R>, RevAiError> {
        let token = self
            .access_token
            .as_ref()
            .map(|t| t.expose_secret())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RevAiError::invalid_argument("access_token must be provided"))?;
        let api_name = self
            .api_name
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RevAiError::invalid_argument("api_name must be provided"))?;
        let api_version = self
            .api_version
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RevAiError::invalid_argument("api_version must be provided"))?;

        let base_url = format!(
            "{}/{}/{}/",
            self.host_url.trim_end_matches('/'),
            api_name,
            api_version
        );

        let user_agent = self
            .http_config
            .user_agent
            .clone()
            .unwrap_or_else(defaults::user_agent);
        let default_headers = HttpHeaderBuilder::new()
            .with_custom_headers(&self.http_config.headers)?
            .with_bearer_auth(token)?
            .with_user_agent(&user_agent)?
            .build();

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::from_config(&self.http_config)?),
        };

        debug!(api = %api_name, base_url = %base_url, "Client constructed");
        Ok(ApiClient {
            api_name,
            base_url,
            default_headers,
            transport,
            job_deserializer,
            result_deserializer,
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
