//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests:
//! fixture loading, an in-memory [`Transport`] that records every request,
//! and a minimal HTTP stub server for exercising the real transport.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use diveharder_lib::{ApiHost, Context, Error, Result, Transport};
use serde_json::Value;

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load and parse a JSON fixture.
pub fn fixture(name: &str) -> Value {
    let path = fixtures_dir().join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

/// Transport answering from a fixed route table keyed by `a/b/c` paths.
///
/// Unknown paths answer HTTP 404. Paths registered with
/// [`ScriptedTransport::fail`] answer a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, Value>,
    failures: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path` (e.g. `api/v1/planets`).
    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }

    /// Serve a fixture file for `path`.
    pub fn route_fixture(self, path: &str, name: &str) -> Self {
        self.route(path, fixture(name))
    }

    /// Fail every request to `path` as if retries were exhausted.
    pub fn fail(mut self, path: &str) -> Self {
        self.failures.push(path.to_string());
        self
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests().iter().filter(|p| p.as_str() == path).count()
    }

    /// Wrap into a context, keeping a handle for request assertions.
    pub fn into_context(self) -> (Arc<ScriptedTransport>, Context) {
        let transport = Arc::new(self);
        let ctx = Context::with_transport(transport.clone());
        (transport, ctx)
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, host: ApiHost, segments: &[&str]) -> Result<Value> {
        assert_eq!(host, ApiHost::Community, "all families live on the community host");
        let path = segments.join("/");
        self.requests.lock().expect("requests lock").push(path.clone());

        if self.failures.contains(&path) {
            return Err(Error::Transport {
                url: path,
                attempts: 6,
                reason: "scripted failure".to_string(),
            });
        }
        self.routes.get(&path).cloned().ok_or(Error::Status {
            url: path,
            status: 404,
        })
    }
}

/// Canned response served by [`StubServer`].
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
    /// Bytes promised by `Content-Length` beyond the body actually sent.
    pub missing_bytes: usize,
}

impl StubResponse {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
            missing_bytes: 0,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            headers: Vec::new(),
            missing_bytes: 0,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Close the connection before the declared body length is sent.
    pub fn truncated(mut self) -> Self {
        self.missing_bytes = 64;
        self
    }
}

/// Minimal HTTP/1.1 server on an ephemeral local port.
///
/// Responses are served in order; the last one repeats once the list is
/// exhausted. The raw head of every request is recorded.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(responses: Vec<StubResponse>) -> Self {
        assert!(!responses.is_empty(), "stub server needs at least one response");
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for (served, stream) in listener.incoming().enumerate() {
                let Ok(mut stream) = stream else { continue };
                let mut head = String::new();
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if line == "\r\n" => break,
                        Ok(_) => head.push_str(&line),
                    }
                }
                recorded.lock().expect("requests lock").push(head);

                let response = &responses[served.min(responses.len() - 1)];
                let extra: String = response
                    .headers
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}\r\n"))
                    .collect();
                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
                    response.status,
                    reason(response.status),
                    response.body.len() + response.missing_bytes,
                    extra,
                    response.body
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, requests }
    }

    /// Raw request heads received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
