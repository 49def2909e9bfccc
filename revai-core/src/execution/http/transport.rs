//! HTTP transport abstraction.
//!
//! `ApiClient` never talks to `reqwest` directly. It hands a fully-built
//! [`HttpTransportRequest`] to an [`HttpTransport`] and receives the raw
//! status, headers and body back. The default implementation is
//! [`ReqwestTransport`]; tests and embedders can inject their own to observe
//! the final URL/headers/body or to return synthetic responses.

use crate::error::RevAiError;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;

/// One part of a multipart/form-data body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    pub name: String,
    /// Sent as the part's `filename`; `None` makes it a plain form field.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl MultipartPart {
    /// A plain text field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: value.into().into_bytes(),
        }
    }

    /// A file field.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            data,
        }
    }

    /// Part data as UTF-8 text (lossy).
    pub fn text_value(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartPart>),
}

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: TransportBody,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Final URL of the exchange.
    pub url: String,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, RevAiError> {
        serde_json::from_slice(&self.body).map_err(|e| {
            RevAiError::DeserializationError(format!("response from {} is not JSON: {e}", self.url))
        })
    }
}

/// Executes exactly one HTTP exchange per call. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RevAiError>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, RevAiError> {
        Ok(Self::new(super::build_http_client_from_config(config)?))
    }
}

fn build_form(parts: Vec<MultipartPart>) -> Result<reqwest::multipart::Form, RevAiError> {
    let mut form = reqwest::multipart::Form::new();
    for p in parts {
        let mut part = reqwest::multipart::Part::bytes(p.data);
        if let Some(file_name) = p.file_name {
            part = part.file_name(file_name);
        }
        if let Some(content_type) = p.content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                RevAiError::ConfigurationError(format!("Invalid content type '{content_type}': {e}"))
            })?;
        }
        form = form.part(p.name, part);
    }
    Ok(form)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RevAiError> {
        let mut rb = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        rb = match request.body {
            TransportBody::Empty => rb,
            TransportBody::Json(json) => rb.json(&json),
            TransportBody::Multipart(parts) => rb.multipart(build_form(parts)?),
        };

        let resp = rb
            .send()
            .await
            .map_err(|e| RevAiError::TransportError(e.to_string()))?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let url = resp.url().to_string();
        let body = resp
            .bytes()
            .await
            .map_err(|e| RevAiError::TransportError(e.to_string()))?
            .to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpTransportResponse {
        HttpTransportResponse {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
            url: "http://test/jobs".to_string(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(302, "").is_success());
        assert!(!response(404, "").is_success());
    }

    #[test]
    fn non_json_body_is_a_deserialization_error() {
        let err = response(200, "<html>").json().unwrap_err();
        assert!(matches!(err, RevAiError::DeserializationError(ref m) if m.contains("http://test/jobs")));
    }

    #[test]
    fn invalid_part_content_type_is_rejected() {
        let part = MultipartPart::file("media", "a.mp3", "not a mime", vec![1, 2, 3]);
        assert!(build_form(vec![part]).is_err());
    }

    #[tokio::test]
    async fn reqwest_transport_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("DELETE", "/jobs/1")
            .with_status(204)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(reqwest::Client::new());
        let resp = transport
            .execute(HttpTransportRequest {
                method: Method::DELETE,
                url: format!("{}/jobs/1", server.url()),
                headers: HeaderMap::new(),
                body: TransportBody::Empty,
            })
            .await
            .expect("response");

        assert_eq!(resp.status, 204);
        assert!(resp.body.is_empty());
    }
}
