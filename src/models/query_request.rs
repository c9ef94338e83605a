use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request payload for RDB query and exec operations.
///
/// # Examples
///
/// ```rust
/// use combinator_link::QueryRequest;
/// use serde_json::json;
///
/// // Simple statement without arguments
/// let request = QueryRequest {
///     stmt: "SELECT * FROM users".to_string(),
///     args: vec![],
/// };
///
/// // Parametrized statement
/// let request = QueryRequest {
///     stmt: "SELECT * FROM users WHERE id = ?".to_string(),
///     args: vec![json!(42)],
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// SQL statement (may contain placeholders)
    pub stmt: String,

    /// Positional argument values for placeholders
    #[serde(default)]
    pub args: Vec<JsonValue>,
}
