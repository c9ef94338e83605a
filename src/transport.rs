//! HTTP transport seam for the Combinator gateway.
//!
//! All adapters talk to the server through the [`Transport`] trait so tests
//! can substitute a stub without network I/O. The production implementation,
//! [`HttpTransport`], is a thin wrapper over [`reqwest::Client`]: it appends
//! the path to the normalized endpoint and performs a single request. No
//! retries, no redirect handling beyond reqwest defaults, no timeout other
//! than what the builder configured — callers layer those externally.

use crate::error::{CombinatorError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use serde::de::DeserializeOwned;

/// A response obtained from the transport.
///
/// A non-2xx status is a normal response, not an error; the adapters decide
/// how to classify it. Only failures that produced no response at all
/// (unreachable host, DNS, TLS) surface as [`CombinatorError::Transport`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    status: u16,
    body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Read the body as UTF-8 text.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| CombinatorError::Decode(format!("response body is not UTF-8: {}", e)))
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Consume the response, yielding the raw body bytes.
    pub fn into_bytes(self) -> Bytes {
        self.body
    }
}

/// Low-level request contract shared by the RDB, KV and monitor adapters.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single HTTP request against the configured endpoint.
    ///
    /// `path` is appended verbatim to the endpoint base URL. `headers` are
    /// name/value pairs attached to the request as-is.
    async fn request(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, String)],
        body: Option<Bytes>,
    ) -> Result<TransportResponse>;
}

/// Production transport over [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for `base_url`, normalizing away trailing slashes.
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client,
        }
    }

    /// The normalized endpoint this transport points at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, String)],
        body: Option<Bytes>,
    ) -> Result<TransportResponse> {
        let url = format!("{}{}", self.base_url, path);
        let http_method: reqwest::Method = method
            .parse()
            .map_err(|_| CombinatorError::Configuration(format!("invalid HTTP method: {}", method)))?;

        let mut req_builder = self.http_client.request(http_method, &url);
        for (name, value) in headers {
            req_builder = req_builder.header(*name, value.as_str());
        }
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        debug!("[LINK_HTTP] Sending {} to {}", method, url);
        let response = req_builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(
            "[LINK_HTTP] Response received: status={} body_len={}",
            status,
            body.len()
        );

        Ok(TransportResponse::new(status, body))
    }
}
