// SPDX-License-Identifier: MPL-2.0
//! API client against a one-shot HTTP server on loopback.

use bant_media::api::{self, ApiError, ImageApiClient};
use bant_media::app::config::ApiConfig;
use bant_media::ui::gallery::display_order;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct RecordedRequest {
    method: String,
    path: String,
    /// Header block, lowercased.
    headers: String,
    body: Vec<u8>,
}

impl RecordedRequest {
    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn content_length(headers: &str) -> Option<usize> {
    headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse().ok())
}

/// Accepts a single connection, records the request and answers with
/// `status` and `body`.
async fn serve_once(status: u16, body: &'static [u8]) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "connection closed before headers");
            buffer.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buffer, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let raw_head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
        let head = raw_head.to_lowercase();
        let chunked = head.contains("transfer-encoding: chunked");
        let expected = content_length(&head);

        loop {
            let received = buffer.len() - header_end;
            let complete = match expected {
                Some(len) => received >= len,
                None if chunked => buffer.ends_with(b"0\r\n\r\n"),
                None => true,
            };
            if complete {
                break;
            }
            let n = stream.read(&mut chunk).await.expect("read body");
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }

        let mut request_line = raw_head.lines().next().unwrap_or_default().split_whitespace();
        let method = request_line.next().unwrap_or_default().to_string();
        let path = request_line.next().unwrap_or_default().to_string();

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write head");
        stream.write_all(body).await.expect("write body");
        stream.shutdown().await.ok();

        RecordedRequest {
            method,
            path,
            headers: head,
            body: buffer[header_end..].to_vec(),
        }
    });

    (base_url, handle)
}

fn client(base_url: &str) -> ImageApiClient {
    ImageApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(10),
    })
    .expect("client should build")
}

#[tokio::test]
async fn listing_is_fetched_uncached_and_shown_descending() {
    let (base_url, server) = serve_once(
        200,
        br#"{"data":{"urls":["https://x/a.png","https://x/c.png","https://x/b.png"]}}"#,
    )
    .await;

    let urls = client(&base_url)
        .list_images()
        .await
        .expect("listing should succeed");
    let request = server.await.expect("server task");

    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/v1/uploadImg");
    assert!(request.headers.contains("cache-control: no-cache"));
    assert_eq!(
        display_order(&urls),
        vec!["https://x/c.png", "https://x/b.png", "https://x/a.png"]
    );
}

#[tokio::test]
async fn listing_http_500_degrades_to_empty() {
    let (base_url, server) = serve_once(500, br#"{"error":"boom"}"#).await;

    let urls = api::get_images(&client(&base_url)).await;
    server.await.expect("server task");

    assert!(urls.is_empty());
}

#[tokio::test]
async fn listing_http_500_is_a_fetch_error() {
    let (base_url, server) = serve_once(500, b"").await;

    let result = client(&base_url).list_images().await;
    server.await.expect("server task");

    assert_eq!(result, Err(ApiError::Fetch { status: 500 }));
}

#[tokio::test]
async fn malformed_listing_degrades_to_empty() {
    let (base_url, server) = serve_once(200, br#"{"data":{"images":[]}}"#).await;

    let urls = api::get_images(&client(&base_url)).await;
    server.await.expect("server task");

    assert!(urls.is_empty());
}

#[tokio::test]
async fn upload_posts_single_image_field_and_returns_url() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("d.png");
    std::fs::write(&file, b"\x89PNG\r\n\x1a\nfake").expect("write image");

    let (base_url, server) = serve_once(200, br#"{"data":{"url":"https://x/d.png"}}"#).await;

    let url = client(&base_url)
        .upload_image(file)
        .await
        .expect("upload should succeed");
    let request = server.await.expect("server task");

    assert_eq!(url, "https://x/d.png");
    assert_eq!(request.method, "POST");
    assert!(request.headers.contains("multipart/form-data"));

    let body = request.body_text();
    assert_eq!(body.to_lowercase().matches("content-disposition").count(), 1);
    assert!(body.contains(r#"name="image""#));
    assert!(body.contains(r#"filename="d.png""#));
    assert!(body.contains("image/png"));

    let mut images = vec![
        "https://x/a.png".to_string(),
        "https://x/c.png".to_string(),
        "https://x/b.png".to_string(),
    ];
    images.push(url);
    assert_eq!(
        display_order(&images),
        vec![
            "https://x/d.png",
            "https://x/c.png",
            "https://x/b.png",
            "https://x/a.png"
        ]
    );
}

#[tokio::test]
async fn upload_http_500_is_an_upload_error() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("e.jpg");
    std::fs::write(&file, b"jpeg").expect("write image");

    let (base_url, server) = serve_once(500, br#"{"error":"disk full"}"#).await;

    let result = client(&base_url).upload_image(file).await;
    server.await.expect("server task");

    assert_eq!(result, Err(ApiError::Upload { status: 500 }));
}

#[tokio::test]
async fn image_bytes_are_passed_through() {
    let (base_url, server) = serve_once(200, b"raw-image-bytes").await;

    let bytes = client(&base_url)
        .fetch_image(format!("{base_url}/uploads/a.png"))
        .await
        .expect("download should succeed");
    let request = server.await.expect("server task");

    assert_eq!(request.path, "/uploads/a.png");
    assert_eq!(bytes, b"raw-image-bytes");
}
