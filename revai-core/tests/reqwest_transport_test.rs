//! ApiClient over the default reqwest transport against a local mock server.

use mockito::Matcher;
use revai_core::types::{HttpConfig, JobOptions};
use revai_core::execution::payload::enhance_payload;
use revai_core::execution::url::QueryParams;
use revai_core::{ApiClient, RevAiError};
use serde_json::{Map, Value, json};
use std::time::Duration;

fn client(server: &mockito::ServerGuard) -> ApiClient<Value, Value> {
    ApiClient::builder()
        .access_token("t")
        .api("languageid", "v1")
        .host_url(server.url())
        .http_config(
            HttpConfig::builder()
                .timeout(Some(Duration::from_secs(5)))
                .user_agent(Some("revai-tests/1.0"))
                .build(),
        )
        .build(|v| Ok(v.clone()), |v| Ok(v.clone()))
        .expect("client")
}

#[tokio::test]
async fn multipart_upload_sends_media_and_sorted_options() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/languageid/v1/jobs")
        .match_header("authorization", "Bearer t")
        .match_header("user-agent", "revai-tests/1.0")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="media"; filename="clip.wav""#.to_string()),
            Matcher::Regex(r#"name="options""#.to_string()),
            Matcher::Regex(
                r#"\{"callback_url":"https://cb/","delete_after_seconds":0,"metadata":"t"\}"#
                    .to_string(),
            ),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"j1","status":"in_progress"}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clip.wav");
    std::fs::write(&path, b"RIFF\x24\x00\x00\x00WAVEfmt ").expect("write");

    let options = JobOptions::new()
        .with_metadata("t")
        .with_callback_url("https://cb/")
        .with_delete_after_seconds(0);
    let job = client(&server)
        .submit_job_with_file(&path, enhance_payload(Map::new(), &options))
        .await
        .expect("job");

    assert_eq!(job["id"], json!("j1"));
    m.assert_async().await;
}

#[tokio::test]
async fn result_query_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/languageid/v1/jobs/j1/result")
        .match_query(Matcher::UrlEncoded("filter_for".into(), "negative".into()))
        .with_status(200)
        .with_body(r#"{"messages":[]}"#)
        .create_async()
        .await;

    let query = QueryParams::new().with("filter_for", "negative");
    let body = client(&server)
        .get_result_json("j1", &query)
        .await
        .expect("result");

    assert_eq!(body, json!({"messages": []}));
    m.assert_async().await;
}

#[tokio::test]
async fn error_body_is_preserved() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/languageid/v1/jobs")
        .with_status(400)
        .with_body(r#"{"title":"Your request parameters didn't validate","detail":"media_url is invalid"}"#)
        .create_async()
        .await;

    let mut payload = Map::new();
    payload.insert("media_url".into(), json!("nope"));
    let err = client(&server).submit_job(payload).await.unwrap_err();

    match err {
        RevAiError::HttpError {
            status,
            message,
            details,
            ..
        } => {
            assert_eq!(status, 400);
            assert!(message.contains("media_url is invalid"));
            assert_eq!(
                details.and_then(|d| d.get("detail").cloned()),
                Some(json!("media_url is invalid"))
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = ApiClient::builder()
        .access_token("t")
        .api("languageid", "v1")
        .host_url("http://127.0.0.1:9")
        .build::<Value, Value>(|v| Ok(v.clone()), |v| Ok(v.clone()))
        .expect("client");

    let err = client.get_job_details("j1").await.unwrap_err();
    assert!(matches!(err, RevAiError::TransportError(_)));
}
