//! Shared test support: a transport that records requests and replays a canned response.

#![allow(dead_code)]

use async_trait::async_trait;
use revai::ApiClientBuilder;
use revai::RevAiError;
use revai::execution::http::{
    HeaderMap, HttpTransport, HttpTransportRequest, HttpTransportResponse, TransportBody,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    status: u16,
    body: Vec<u8>,
}

impl RecordingTransport {
    pub fn json(status: u16, body: Value) -> Self {
        Self::raw(status, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            status,
            body: body.into().into_bytes(),
        }
    }

    pub fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn only_call(&self) -> HttpTransportRequest {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request");
        calls.into_iter().next().expect("one call")
    }

    /// Builder authenticated with `test_token` and wired to this transport.
    pub fn builder(&self) -> ApiClientBuilder {
        ApiClientBuilder::new()
            .access_token("test_token")
            .transport(Arc::new(self.clone()))
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, RevAiError> {
        let url = request.url.clone();
        self.calls.lock().expect("lock").push(request);
        Ok(HttpTransportResponse {
            status: self.status,
            headers: HeaderMap::new(),
            body: self.body.clone(),
            url,
        })
    }
}

pub fn json_body(request: &HttpTransportRequest) -> Value {
    match &request.body {
        TransportBody::Json(value) => value.clone(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

pub const JOB_ID: &str = "Umx5c6F7pH7r";

pub fn in_progress_job() -> Value {
    json!({
        "id": JOB_ID,
        "status": "in_progress",
        "created_on": "2018-05-05T23:23:22.29Z",
        "callback_url": "https://example.com/",
        "metadata": "test",
        "type": "sentiment_analysis"
    })
}
