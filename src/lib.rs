//! combinator-link: async client library for the Combinator gateway.
//!
//! The Combinator gateway multiplexes two store facets behind one HTTP
//! endpoint — a relational store ("RDB") addressed by query/exec/batch, and
//! a binary key-value store ("KV") — plus a JSON-RPC 2.0 control channel
//! for service discovery. This crate turns typed method calls into wire
//! requests and interprets the gateway's heterogeneous responses: tabular
//! text for queries, JSON for exec results, raw bytes for KV values, and
//! JSON-RPC envelopes on the monitor channel.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use combinator_link::CombinatorClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CombinatorClient::builder()
//!     .base_url("http://localhost:8899")
//!     .build()?;
//!
//! let rdb = client.rdb("0");
//! rdb.exec("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)", &[])
//!     .await?;
//!
//! let result = rdb
//!     .query("SELECT id, name FROM users", &[], Some(&["number", "string"]))
//!     .await?;
//! for row in &result.rows {
//!     println!("{:?}", row);
//! }
//!
//! let kv = client.kv("cache");
//! kv.set("greeting", bytes::Bytes::from_static(b"hello")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! The library performs one request per call: no retries, no connection
//! management beyond reqwest's defaults, no timeouts unless configured on
//! the builder. All failures surface as distinct [`CombinatorError`]
//! variants; nothing is swallowed or retried internally.

pub mod client;
pub mod decode;
pub mod error;
pub mod kv;
pub mod models;
pub mod monitor;
pub mod rdb;
pub mod transport;

pub use client::{CombinatorClient, CombinatorClientBuilder};
pub use error::{CombinatorError, Result};
pub use kv::KvClient;
pub use models::{
    Cell, ExecResult, QueryRequest, QueryResult, RpcErrorDetail, RpcRequest, RpcResponse,
    SchemaType, ServiceInfo, ServiceList,
};
pub use monitor::MonitorClient;
pub use rdb::RdbClient;
pub use transport::{HttpTransport, Transport, TransportResponse};
