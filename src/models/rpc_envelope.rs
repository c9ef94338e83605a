use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// JSON-RPC 2.0 request envelope sent to the `/monitor` control channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version tag, always `"2.0"`
    pub jsonrpc: String,

    /// Method name (e.g. `"service.list"`)
    pub method: String,

    /// Optional method parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<JsonValue>,

    /// Correlation id, echoed back in the response
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Option<JsonValue>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
///
/// Carries either `result` or `error`; an error can arrive inside a 2xx
/// HTTP response, so callers must check it regardless of transport status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorDetail>,

    /// Correlation id from the matching request. The gateway answers
    /// unparseable requests with `id: null`, so this stays a raw JSON value.
    #[serde(default)]
    pub id: JsonValue,
}

/// Application-level error reported inside a JSON-RPC envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorDetail {
    /// Numeric error code (JSON-RPC reserved codes are negative)
    pub code: i64,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}
