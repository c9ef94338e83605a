use serde::{Deserialize, Serialize};

/// Result of a mutating RDB statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Number of rows affected by the statement
    pub rows_affected: u64,

    /// Rowid of the last inserted row, when the backing store reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_insert_id: Option<i64>,
}
