//! Main Combinator client with builder pattern.
//!
//! Provides the entry point for connecting to a Combinator gateway and
//! constructing RDB, KV and monitor adapters scoped to it.

use crate::error::{CombinatorError, Result};
use crate::kv::KvClient;
use crate::monitor::MonitorClient;
use crate::rdb::RdbClient;
use crate::transport::{HttpTransport, Transport};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Main Combinator gateway client.
///
/// Owns the endpoint configuration, which is immutable after construction;
/// adapters created from one client share the underlying transport and may
/// be used concurrently. Use [`CombinatorClientBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust,no_run
/// use combinator_link::CombinatorClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CombinatorClient::builder()
///     .base_url("http://localhost:8899")
///     .build()?;
///
/// let rdb = client.rdb("0");
/// let result = rdb.query("SELECT 1", &[], None).await?;
/// println!("Result: {:?}", result);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CombinatorClient {
    transport: Arc<dyn Transport>,
    monitor: MonitorClient,
}

impl CombinatorClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> CombinatorClientBuilder {
        CombinatorClientBuilder::new()
    }

    /// Adapter for the RDB instance identified by `id`.
    pub fn rdb(&self, id: impl Into<String>) -> RdbClient {
        RdbClient::new(Arc::clone(&self.transport), id.into())
    }

    /// Adapter for the KV instance identified by `id`.
    pub fn kv(&self, id: impl Into<String>) -> KvClient {
        KvClient::new(Arc::clone(&self.transport), id.into())
    }

    /// The JSON-RPC control channel shared by this client.
    ///
    /// All clones of the returned adapter draw correlation ids from the
    /// same counter, so concurrent calls never alias.
    pub fn monitor(&self) -> MonitorClient {
        self.monitor.clone()
    }

    /// Probe the gateway's `/health` endpoint.
    ///
    /// Returns `true` for any 2xx response. A network-level failure still
    /// surfaces as [`CombinatorError::Transport`] so callers can tell an
    /// unhealthy gateway from an unreachable one.
    pub async fn health_check(&self) -> Result<bool> {
        let response = self.transport.request("GET", "/health", &[], None).await?;
        debug!("[HEALTH_CHECK] status={}", response.status());
        Ok(response.is_success())
    }
}

/// Builder for configuring [`CombinatorClient`] instances.
pub struct CombinatorClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl CombinatorClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            transport: None,
        }
    }

    /// Set the base URL of the Combinator gateway.
    ///
    /// Trailing slashes are normalized away; paths are appended verbatim.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a total per-request timeout on the underlying HTTP client.
    ///
    /// The library itself enforces no timeout; without this setting a call
    /// suspends until the server responds or the connection drops.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Substitute a custom [`Transport`] implementation.
    ///
    /// Intended for tests that stub out network I/O; when set, `base_url`
    /// and `timeout` are ignored since the transport owns its endpoint.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CombinatorClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let base_url = self
                    .base_url
                    .ok_or_else(|| CombinatorError::Configuration("base_url is required".into()))?;

                let mut client_builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    client_builder = client_builder.timeout(timeout);
                }
                let http_client = client_builder
                    .build()
                    .map_err(|e| CombinatorError::Configuration(e.to_string()))?;

                Arc::new(HttpTransport::new(base_url, http_client)) as Arc<dyn Transport>
            }
        };

        Ok(CombinatorClient {
            monitor: MonitorClient::new(Arc::clone(&transport)),
            transport,
        })
    }
}
