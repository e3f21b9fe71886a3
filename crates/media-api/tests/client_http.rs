//! Client behaviour against canned HTTP responses on a loopback socket.
//!
//! The fixtures below accept exactly one connection, capture the raw request
//! and answer with a fixed response, which is enough to pin down the error
//! contract and the headers/query parameters the client puts on the wire.

use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use media_api::client::{ApiClient, ApiError};
use media_api::config::ApiConfig;
use media_api::embedded::PageContext;
use media_api::resources::{ListQuery, MediaUpload};

/// Serve one connection: capture the full request, send `response`, close.
async fn serve_once(response: String) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Read the head first.
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            request.extend_from_slice(&buf[..n]);
            if n == 0 || find_head_end(&request).is_some() {
                break;
            }
        }

        // Then drain whatever body follows. Streamed uploads arrive chunked
        // with no Content-Length, so read until the connection goes quiet.
        loop {
            let read = tokio::time::timeout(
                std::time::Duration::from_millis(200),
                socket.read(&mut buf),
            )
            .await;
            match read {
                Ok(Ok(n)) if n > 0 => request.extend_from_slice(&buf[..n]),
                _ => break,
            }
        }

        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.flush().await.expect("flush");
        request
    });

    (base_url, handle)
}

fn find_head_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|w| w == b"\r\n\r\n")
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body,
    )
}

fn client_for(base_url: &str, start_page: &str) -> ApiClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        session_cookie: "sessionid=s3cr3t".to_string(),
    };
    ApiClient::new(&api, PageContext::parse(start_page)).expect("build client")
}

const START_PAGE: &str =
    r#"<input type="hidden" name="csrfmiddlewaretoken" value="tok123">"#;

#[tokio::test]
async fn test_error_response_carries_parsed_body() {
    let (base_url, _request) =
        serve_once(http_response("404 Not Found", r#"{"detail": "not found"}"#)).await;
    let client = client_for(&base_url, START_PAGE);

    let error = client.media_get("missing").await.expect_err("must fail");
    match error {
        ApiError::ErrorResponse { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body["detail"], "not found");
        }
        other => panic!("expected ErrorResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_carries_token_cookie_and_search() {
    let (base_url, request) = serve_once(http_response(
        "200 OK",
        r#"{"results": [], "limit": 18, "offset": 0, "total": 0}"#,
    ))
    .await;
    let client = client_for(&base_url, START_PAGE);

    let list = client
        .media_list(&ListQuery::search("jupiter"))
        .await
        .expect("list");
    assert!(list.results.is_empty());
    assert_eq!(list.limit, 18);

    let request = String::from_utf8(request.await.expect("captured request")).expect("utf8");
    let head = request.to_lowercase();
    assert!(head.starts_with("get /api/media/?search=jupiter http/1.1"));
    assert!(head.contains("x-csrftoken: tok123"));
    assert!(head.contains("cookie: sessionid=s3cr3t"));
    assert!(head.contains("content-type: application/json"));
    // ordering was None and must not appear at all.
    assert!(!head.contains("ordering"));
}

#[tokio::test]
async fn test_profile_fetched_when_not_embedded() {
    let (base_url, request) = serve_once(http_response(
        "200 OK",
        r#"{"isAnonymous": true, "channels": []}"#,
    ))
    .await;
    let client = client_for(&base_url, START_PAGE);

    let profile = client.profile().await.expect("profile");
    assert!(profile.is_anonymous);

    let request = String::from_utf8(request.await.expect("captured request")).expect("utf8");
    assert!(request.to_lowercase().starts_with("get /api/profile http/1.1"));
}

#[tokio::test]
async fn test_non_json_error_body_propagates_as_decode_failure() {
    let body = "<html>sad server</html>";
    let (base_url, _request) = serve_once(format!(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body,
    ))
    .await;
    let client = client_for(&base_url, START_PAGE);

    // The decode failure of the error body surfaces as-is, not wrapped in a
    // descriptor.
    let error = client.media_get("m1").await.expect_err("must fail");
    assert!(matches!(error, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_upload_streams_file_to_target() {
    let (base_url, request) = serve_once(http_response("200 OK", "{}")).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clip.mp4");
    tokio::fs::write(&path, b"fake mp4 bytes").await.expect("write fixture");

    let upload = MediaUpload {
        url: format!("{}/upload/slot-1", base_url),
        expires_at: chrono::Utc::now() + chrono::Duration::hours(1),
    };
    media_api::upload::send_file(&upload, Path::new(&path))
        .await
        .expect("upload");

    let request = request.await.expect("captured request");
    let text = String::from_utf8_lossy(&request);
    assert!(text.to_lowercase().starts_with("put /upload/slot-1 http/1.1"));
    assert!(text.contains("fake mp4 bytes"));
}
