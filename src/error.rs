//! Error types for the combinator-link client library.
//!
//! Every failure mode surfaces as a distinct [`CombinatorError`] variant so
//! callers can match on what went wrong. Nothing is retried or swallowed
//! inside the library.

use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CombinatorError>;

/// Errors returned by combinator-link operations.
///
/// HTTP-level failures are split per adapter so a caller holding several
/// adapters can tell which operation failed from the error alone. A non-2xx
/// status is always reported through one of these variants, never as a
/// [`CombinatorError::Transport`] — that variant is reserved for failures
/// where no response was obtained at all (DNS, TLS, unreachable host).
#[derive(Debug, Error)]
pub enum CombinatorError {
    /// Network-level failure: no HTTP response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// RDB query returned a non-2xx status.
    #[error("RDB query failed with status {status}")]
    Query { status: u16 },

    /// RDB exec returned a non-2xx status.
    #[error("RDB exec failed with status {status}")]
    Exec { status: u16 },

    /// RDB batch returned a non-2xx status.
    ///
    /// The wire protocol carries no per-statement failure detail, so this is
    /// all a caller can learn about a failed batch.
    #[error("RDB batch failed with status {status}")]
    Batch { status: u16 },

    /// KV get returned a non-2xx status.
    ///
    /// The protocol does not distinguish "key not found" from other
    /// failures; the status code is all the server reports.
    #[error("KV get failed with status {status}")]
    Get { status: u16 },

    /// KV set returned a non-2xx status.
    #[error("KV set failed with status {status}")]
    Set { status: u16 },

    /// Malformed tabular payload: a row whose width disagrees with the
    /// header, or a cell that failed numeric coercion.
    #[error("Failed to decode query result: {0}")]
    Decode(String),

    /// Caller supplied a schema tag outside {string, number, boolean}.
    /// Raised before any network request is issued.
    #[error("Invalid schema type: {0}")]
    InvalidSchema(String),

    /// JSON-RPC call returned a non-2xx HTTP status.
    #[error("RPC transport failed with status {status}")]
    RpcTransport { status: u16 },

    /// JSON-RPC envelope carried an application-level error. Reported even
    /// when the HTTP status was 2xx.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Request or response body failed JSON (de)serialization.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client was misconfigured (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CombinatorError {
    /// HTTP status carried by this error, if it was produced by a non-2xx
    /// response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Query { status }
            | Self::Exec { status }
            | Self::Batch { status }
            | Self::Get { status }
            | Self::Set { status }
            | Self::RpcTransport { status } => Some(*status),
            _ => None,
        }
    }
}
