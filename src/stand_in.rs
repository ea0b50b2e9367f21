//! A one-shot HTTP server on loopback, standing in for Google in tests.

use tokio::{
  io::{AsyncReadExt, AsyncWriteExt},
  net::TcpListener,
  task::JoinHandle
};

/// What the server was sent
#[derive(Debug)]
pub struct Received {
  pub request_line: String,
  pub headers: Vec<(String, String)>,
  pub body: String
}

impl Received {
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }
}

/// Answers exactly one request with `status` and `body`, returning the
/// base url to point a client at and a handle yielding what it received.
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Received>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let base = format!("http://{}", listener.local_addr().unwrap());

  let handle = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "connection closed before the request head was complete");
      buf.extend_from_slice(&chunk[..n]);
      if let Some(i) = buf.windows(4).position(|w| w == b"\r\n\r\n") { break i }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_owned();
    let headers: Vec<(String, String)> = lines
      .filter_map(|l| l.split_once(':'))
      .map(|(k, v)| (k.trim().to_owned(), v.trim().to_owned()))
      .collect();

    let length = headers
      .iter()
      .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
      .and_then(|(_, v)| v.parse::<usize>().ok())
      .unwrap_or(0);

    let body_start = head_end + 4;
    while buf.len() < body_start + length {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "connection closed before the body was complete");
      buf.extend_from_slice(&chunk[..n]);
    }
    let request_body = String::from_utf8_lossy(&buf[body_start..body_start + length]).into_owned();

    let response = format!(
      "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
      status, body.len(), body
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.unwrap();

    Received { request_line, headers, body: request_body }
  });

  (base, handle)
}

/// A client that talks to loopback directly, whatever proxy the environment names
pub fn http() -> reqwest::Client {
  reqwest::Client::builder().no_proxy().build().unwrap()
}
