//! KV adapter: binary get/set over the HTTP transport.
//!
//! Keys and the instance id travel as headers, values as raw request or
//! response bodies. The protocol has no distinct "not found" signal: a
//! missing key surfaces as whatever non-2xx status the server chose, via
//! [`CombinatorError::Get`]. That ambiguity is part of the wire contract
//! and is preserved here rather than papered over with a status guess.

use crate::error::{CombinatorError, Result};
use crate::transport::Transport;
use bytes::Bytes;
use log::{debug, warn};
use std::sync::Arc;

const KV_ID_HEADER: &str = "X-Combinator-KV-ID";
const KV_KEY_HEADER: &str = "X-Combinator-KV-Key";

/// Client for one KV instance on the gateway.
///
/// Constructed via [`CombinatorClient::kv`](crate::CombinatorClient::kv).
#[derive(Clone)]
pub struct KvClient {
    transport: Arc<dyn Transport>,
    instance_id: String,
}

impl KvClient {
    pub(crate) fn new(transport: Arc<dyn Transport>, instance_id: String) -> Self {
        Self {
            transport,
            instance_id,
        }
    }

    /// The instance id this adapter addresses.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Fetch the value stored under `key` as opaque bytes.
    pub async fn get(&self, key: &str) -> Result<Bytes> {
        debug!("[KV_GET] instance={} key={}", self.instance_id, key);
        let response = self
            .transport
            .request("GET", "/kv/get", &self.headers(key), None)
            .await?;

        if !response.is_success() {
            warn!(
                "[KV_GET] instance={} key={} failed: status={}",
                self.instance_id,
                key,
                response.status()
            );
            return Err(CombinatorError::Get {
                status: response.status(),
            });
        }

        Ok(response.into_bytes())
    }

    /// Store `value` under `key`, overwriting any previous value.
    pub async fn set(&self, key: &str, value: Bytes) -> Result<()> {
        debug!(
            "[KV_SET] instance={} key={} value_len={}",
            self.instance_id,
            key,
            value.len()
        );
        let response = self
            .transport
            .request("POST", "/kv/set", &self.headers(key), Some(value))
            .await?;

        if !response.is_success() {
            warn!(
                "[KV_SET] instance={} key={} failed: status={}",
                self.instance_id,
                key,
                response.status()
            );
            return Err(CombinatorError::Set {
                status: response.status(),
            });
        }

        Ok(())
    }

    fn headers(&self, key: &str) -> [(&'static str, String); 3] {
        [
            ("Content-Type", "application/octet-stream".to_string()),
            (KV_ID_HEADER, self.instance_id.clone()),
            (KV_KEY_HEADER, key.to_string()),
        ]
    }
}
