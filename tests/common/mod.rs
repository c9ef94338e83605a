#![allow(dead_code)]
//! Shared test helpers: transport stubs that record requests and serve
//! scripted responses, so adapter behavior is testable without a server.

use async_trait::async_trait;
use bytes::Bytes;
use combinator_link::{Result, Transport, TransportResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One request as seen by a stub transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_ref().expect("request had no body"))
            .expect("request body is not JSON")
    }
}

/// Transport stub serving a scripted queue of responses.
///
/// Responses are consumed in order; when the queue is empty the fallback
/// response (200 with an empty body unless overridden) is served. Every
/// request is recorded for later assertions.
pub struct StubTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    fallback: TransportResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::with_fallback(TransportResponse::new(200, Bytes::new()))
    }

    /// Serve `status`/`body` for every request.
    pub fn always(status: u16, body: impl Into<Bytes>) -> Self {
        Self::with_fallback(TransportResponse::new(status, body.into()))
    }

    pub fn with_fallback(fallback: TransportResponse) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue one response, served before the fallback.
    pub fn push_response(&self, status: u16, body: impl Into<Bytes>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(TransportResponse::new(status, body.into()));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn request(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, String)],
        body: Option<Bytes>,
    ) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            headers: headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.clone()))
                .collect(),
            body,
        });

        let queued = self.responses.lock().unwrap().pop_front();
        Ok(queued.unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Cooperative in-memory KV server behind the transport seam.
///
/// Implements just enough of the wire protocol for set/get round trips:
/// values are keyed by (instance id, key) headers, a get for a missing key
/// answers 404.
pub struct InMemoryKvTransport {
    store: Mutex<HashMap<(String, String), Bytes>>,
}

impl InMemoryKvTransport {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Transport for InMemoryKvTransport {
    async fn request(
        &self,
        _method: &str,
        path: &str,
        headers: &[(&str, String)],
        body: Option<Bytes>,
    ) -> Result<TransportResponse> {
        let header = |name: &str| {
            headers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        let slot = (header("X-Combinator-KV-ID"), header("X-Combinator-KV-Key"));

        match path {
            "/kv/set" => {
                self.store
                    .lock()
                    .unwrap()
                    .insert(slot, body.unwrap_or_default());
                Ok(TransportResponse::new(200, Bytes::new()))
            }
            "/kv/get" => match self.store.lock().unwrap().get(&slot) {
                Some(value) => Ok(TransportResponse::new(200, value.clone())),
                None => Ok(TransportResponse::new(404, Bytes::new())),
            },
            _ => Ok(TransportResponse::new(404, Bytes::new())),
        }
    }
}
