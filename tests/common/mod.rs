//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request observed by the mock management service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// How the mock management service answers.
#[derive(Debug, Clone, Copy)]
pub enum MockResponse {
    /// 200 with the request body echoed back.
    Echo,
    /// Fixed status and body.
    Fixed(u16, &'static str),
}

/// Start a mock management service on `addr`.
///
/// Returns the shared record of every request the service accepted, so
/// tests can assert on paths and bodies.
pub async fn start_mock_service(
    addr: SocketAddr,
    response: MockResponse,
) -> Arc<Mutex<Vec<RecordedRequest>>> {
    let listener = TcpListener::bind(addr).await.unwrap();
    let seen: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
    let record = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let record = record.clone();
                    tokio::spawn(async move {
                        let request = match read_request(&mut socket).await {
                            Some(r) => r,
                            None => return,
                        };

                        let (status_line, body) = match response {
                            MockResponse::Echo => ("200 OK", request.body.clone()),
                            MockResponse::Fixed(status, body) => {
                                let status_line = match status {
                                    200 => "200 OK",
                                    404 => "404 Not Found",
                                    500 => "500 Internal Server Error",
                                    503 => "503 Service Unavailable",
                                    _ => "200 OK",
                                };
                                (status_line, body.to_string())
                            }
                        };

                        record.lock().unwrap().push(request);

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    seen
}

/// Read one HTTP/1.1 request off the socket: request line, headers up to the
/// blank line, then Content-Length bytes of body.
async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let headers_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..headers_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < headers_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (headers_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[headers_end..body_end]).to_string();

    Some(RecordedRequest { method, path, body })
}
