use serde::{Deserialize, Serialize};

/// A single store advertised by the gateway's `service.list` RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Instance id used to address the store
    pub id: String,

    /// Backend type (e.g. `"sqlite"`, `"badger"`)
    #[serde(rename = "type")]
    pub service_type: String,
}

/// All stores currently hosted by the gateway, grouped by facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceList {
    /// Relational store instances
    #[serde(default)]
    pub rdb: Vec<ServiceInfo>,

    /// Key-value store instances
    #[serde(default)]
    pub kv: Vec<ServiceInfo>,
}
