//! Data models for the combinator-link client library.
//!
//! Defines request and response structures for the RDB query/exec protocol,
//! the KV store, and the JSON-RPC monitor channel.

pub mod cell;
pub mod exec_result;
pub mod query_request;
pub mod query_result;
pub mod rpc_envelope;
pub mod schema_type;
pub mod service_info;


pub use cell::Cell;
pub use exec_result::ExecResult;
pub use query_request::QueryRequest;
pub use query_result::QueryResult;
pub use rpc_envelope::{RpcErrorDetail, RpcRequest, RpcResponse};
pub use schema_type::SchemaType;
pub use service_info::{ServiceInfo, ServiceList};
