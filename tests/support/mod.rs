//! Shared test support: a single-request Logseq API stub.

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the stub saw on the wire.
#[derive(Debug)]
pub struct CapturedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Spawn a one-shot HTTP server that answers the next request with the given
/// status and JSON body, and reports what it received.
///
/// Returns the base URL to point the client at plus a receiver for the
/// captured request.
pub async fn stub_api(
    status: u16,
    response_body: &str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    let (tx, rx) = oneshot::channel();
    let response_body = response_body.to_string();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept stub connection");

        let mut buf = Vec::new();
        let (header_end, headers) = loop {
            let mut chunk = [0u8; 4096];
            let n = socket.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_blank_line(&buf) {
                break (pos + 4, String::from_utf8_lossy(&buf[..pos]).to_string());
            }
        };

        let content_length = headers
            .lines()
            .find_map(|line| {
                line.to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(|v| v.trim().parse::<usize>().expect("content-length value"))
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let mut chunk = [0u8; 4096];
            let n = socket.read(&mut chunk).await.expect("read body");
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }

        let path = headers
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
            .to_string();
        let authorization = headers.lines().find_map(|line| {
            line.to_ascii_lowercase()
                .starts_with("authorization:")
                .then(|| line[line.find(':').unwrap() + 1..].trim().to_string())
        });
        let body: Value = serde_json::from_slice(&buf[header_end..header_end + content_length])
            .expect("request body is JSON");

        let _ = tx.send(CapturedRequest {
            path,
            authorization,
            body,
        });

        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
            response_body.len(),
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
    });

    (format!("http://{addr}"), rx)
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
