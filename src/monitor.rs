//! JSON-RPC 2.0 control channel for out-of-band gateway calls.

use crate::error::{CombinatorError, Result};
use crate::models::{RpcRequest, RpcResponse, ServiceList};
use crate::transport::Transport;
use bytes::Bytes;
use log::{debug, warn};
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const MONITOR_PATH: &str = "/monitor";

/// Client for the gateway's `/monitor` JSON-RPC channel.
///
/// Correlation ids come from an atomic counter shared by all clones, so two
/// in-flight calls never alias even when issued from different tasks. Ids
/// are process-scoped and never persisted.
#[derive(Clone)]
pub struct MonitorClient {
    transport: Arc<dyn Transport>,
    next_id: Arc<AtomicU64>,
}

impl MonitorClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Invoke a JSON-RPC method and return its `result` payload.
    ///
    /// A non-2xx HTTP status fails with
    /// [`CombinatorError::RpcTransport`]. An `error` field in the decoded
    /// envelope fails with [`CombinatorError::Rpc`] — checked even on a 2xx
    /// status, since JSON-RPC reports application errors inside a successful
    /// transport response.
    pub async fn call(&self, method: &str, params: Option<JsonValue>) -> Result<JsonValue> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);
        let body = serde_json::to_vec(&request)?;

        debug!("[MONITOR] Calling method={} id={}", method, id);
        let response = self
            .transport
            .request(
                "POST",
                MONITOR_PATH,
                &[("Content-Type", "application/json".to_string())],
                Some(Bytes::from(body)),
            )
            .await?;

        if !response.is_success() {
            warn!(
                "[MONITOR] method={} id={} failed: status={}",
                method,
                id,
                response.status()
            );
            return Err(CombinatorError::RpcTransport {
                status: response.status(),
            });
        }

        let envelope: RpcResponse = response.json()?;
        if let Some(error) = envelope.error {
            warn!(
                "[MONITOR] method={} id={} server error: code={} message=\"{}\"",
                method, id, error.code, error.message
            );
            return Err(CombinatorError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(envelope.result.unwrap_or(JsonValue::Null))
    }

    /// Liveness probe via the gateway's `ping` method.
    pub async fn ping(&self) -> Result<()> {
        self.call("ping", None).await.map(|_| ())
    }

    /// List the RDB and KV instances the gateway currently hosts.
    pub async fn list_services(&self) -> Result<ServiceList> {
        let result = self.call("service.list", None).await?;
        Ok(serde_json::from_value(result)?)
    }
}
