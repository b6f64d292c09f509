//! CLI tests against a wiremock API.
//!
//! The binary is run as a child process; the mock server lives on the
//! test's runtime, so the child is waited for on a blocking thread.

use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "/v1/accounts/57838016001";

/// Run the CLI with connection settings pointing at `server`.
async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_videocloud"));
    cmd.args(args)
        .env("VIDEOCLOUD_ACCOUNT_ID", "57838016001")
        .env("VIDEOCLOUD_CLIENT_ID", "client-id")
        .env("VIDEOCLOUD_CLIENT_SECRET", "client-secret")
        .env("VIDEOCLOUD_CMS_URL", server.uri())
        .env("VIDEOCLOUD_INGEST_URL", server.uri())
        .env("VIDEOCLOUD_AUTH_URL", server.uri())
        .env_remove("VIDEOCLOUD_TIMEOUT_SECS")
        .env_remove("RUST_LOG");

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI thread panicked")
}

fn stdout_json(output: &Output) -> Value {
    if !output.status.success() {
        panic!(
            "CLI command failed\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v3/access_token"))
        .and(query_param("grant_type", "client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 300
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_hides_token_by_default() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let output = run_cli(&server, &["token"]).await;
    let report = stdout_json(&output);

    assert!(report.get("access_token").is_none());
    assert!(report["expires_in"].as_i64().unwrap() > 200);
    assert!(report["expires_at"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_show() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let output = run_cli(&server, &["token", "--show"]).await;
    assert_eq!(stdout_json(&output)["access_token"], "abc");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_credentials_fail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/access_token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["videos", "list"]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication rejected"));
    assert!(stderr.contains("invalid_client"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_videos_get() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/videos/123", ACCOUNT).as_str()))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "123"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["videos", "get", "123"]).await;
    assert_eq!(stdout_json(&output), json!({"id": "123"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_videos_list_with_params() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/videos", ACCOUNT).as_str()))
        .and(query_param("q", "tags:nature"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1"}, {"id": "2"}])))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["videos", "list", "-p", "q=tags:nature", "-p", "limit=2"],
    )
    .await;
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_raw_request_sends_json_body() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("PATCH"))
        .and(path(format!("{}/videos/ref:promo", ACCOUNT).as_str()))
        .and(header("authorization", "Bearer abc"))
        .and(header("x-request-tag", "nightly"))
        .and(body_json(json!({"name": "Promo", "tags": ["a"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "9", "name": "Promo"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &[
            "request",
            "patch",
            "videos/ref:promo",
            "-H",
            "X-Request-Tag: nightly",
            "--body",
            r#"{"tags": ["a"]}"#,
            "-p",
            "name=Promo",
        ],
    )
    .await;
    assert_eq!(stdout_json(&output)["name"], "Promo");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ingest_request() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/videos/123/ingest-requests", ACCOUNT).as_str()))
        .and(body_json(json!({
            "master": {"url": "https://example.com/master.mp4"},
            "profile": "multi-platform-standard-static"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "job-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &[
            "ingest",
            "request",
            "123",
            "--master",
            "https://example.com/master.mp4",
            "--profile",
            "multi-platform-standard-static",
        ],
    )
    .await;
    assert_eq!(stdout_json(&output)["id"], "job-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_empty_response() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/folders/f1/videos/123", ACCOUNT).as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["folders", "remove-video", "f1", "123"]).await;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty response"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_video_id_fails_before_any_request() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    let output = run_cli(&server, &["videos", "get", "a/b"]).await;

    assert!(!output.status.success());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_header_flag_replaces_default_authorization() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{}/video_fields", ACCOUNT).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"custom_fields": []})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["request", "GET", "video_fields", "-H", "Authorization: Bearer other"],
    )
    .await;
    stdout_json(&output);

    let requests = server.received_requests().await.unwrap();
    let call = requests
        .iter()
        .find(|r| r.url.path().ends_with("/video_fields"))
        .unwrap();
    let values: Vec<_> = call.headers.get_all("authorization").iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0], "Bearer other");
    assert_eq!(call.headers.get_all("content-type").iter().count(), 1);
}
