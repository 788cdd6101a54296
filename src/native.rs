//! Native transport and output helpers for the `crawlic` CLI.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::request::{ApiRequest, Transport};

/// `reqwest`-backed transport honouring the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn map_error(&self, e: reqwest::Error) -> RequestError {
        match self.timeout {
            Some(timeout) if e.is_timeout() => RequestError::Timeout(timeout),
            _ => RequestError::Transport(e.to_string()),
        }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: &ApiRequest) -> Result<String, RequestError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        log::debug!("{} answered {}", request.url, response.status());

        response.text().await.map_err(|e| self.map_error(e))
    }
}

/// Write `text` to `path`, creating parent directories, or to stdout.
pub fn write_report(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut contents = text.to_string();
            if !contents.ends_with('\n') {
                contents.push('\n');
            }
            fs::write(path, contents)
        }
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Endpoint;
    use crate::session::Session;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;
    use tempfile::TempDir;

    /// Read one HTTP/1.1 request (head plus `Content-Length` body).
    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve one connection with `status` and `body`, sending back what was received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).unwrap();
            tx.send(request).unwrap();
        });
        (base, rx)
    }

    /// Accept one connection, read the request, and never answer.
    fn serve_stalled() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                thread::sleep(Duration::from_secs(5));
            }
        });
        base
    }

    #[tokio::test]
    async fn test_http_transport_sends_bearer_and_body() {
        let (base, received) = serve_once("403 Forbidden", r#"{"msg":"Invalid API key"}"#);
        let config = ClientConfig::new(base);
        let transport = HttpTransport::new(&config).unwrap();

        let mut session = Session::new();
        session.api_key = "abc123".to_string();
        session.select_endpoint(Endpoint::DescribePage);
        let result = session.run_test(&config, &transport).await.unwrap();

        let request = received.recv_timeout(Duration::from_secs(5)).unwrap();
        let lowered = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /api/describe-page HTTP/1.1\r\n"));
        assert!(lowered.contains("\r\nauthorization: bearer abc123\r\n"));
        assert!(lowered.contains("\r\ncontent-type: application/json\r\n"));
        assert!(request.ends_with(r#"{"link":"https://example.com"}"#));

        // Non-2xx bodies are shown as sent.
        assert_eq!(result.value(), &serde_json::json!({ "msg": "Invalid API key" }));
        assert_eq!(result.status().label(), "Error");
        assert!(!session.loading());
    }

    #[tokio::test]
    async fn test_http_transport_register_is_unauthenticated() {
        let (base, received) = serve_once("200 OK", r#"[{"message":"ok","api_key":"k1"},201]"#);
        let config = ClientConfig::new(base);
        let transport = HttpTransport::new(&config).unwrap();

        let mut session = Session::new();
        session.name = "Ada".to_string();
        session.email = "ada@example.com".to_string();
        session.run_registration(&config, &transport).await.unwrap();

        let request = received.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("POST /api/register HTTP/1.1\r\n"));
        assert!(!request.to_ascii_lowercase().contains("authorization:"));
        assert!(request.ends_with(r#"{"name":"Ada","email":"ada@example.com"}"#));
        assert_eq!(session.api_key, "k1");
    }

    #[tokio::test]
    async fn test_http_transport_timeout() {
        let config = ClientConfig::new(serve_stalled()).with_timeout(Some(Duration::from_secs(1)));
        let transport = HttpTransport::new(&config).unwrap();

        let mut session = Session::new();
        session.api_key = "abc123".to_string();
        let result = session.run_test(&config, &transport).await.unwrap();

        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("request timed out after 1s"));
        assert!(!session.loading());
    }

    #[test]
    fn test_write_report_creates_parents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("reports/nested/result.json");

        write_report(Some(&out), "{\n  \"success\": true\n}").unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "{\n  \"success\": true\n}\n");
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("result.json");

        write_report(Some(&out), "first\n").unwrap();
        write_report(Some(&out), "second").unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "second\n");
    }

    #[test]
    fn test_transport_builds_with_and_without_timeout() {
        assert!(HttpTransport::new(&ClientConfig::default()).is_ok());
        assert!(HttpTransport::new(&ClientConfig::default().with_timeout(None)).is_ok());
    }
}
