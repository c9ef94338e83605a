use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::cell::Cell;

/// Decoded result of an RDB query.
///
/// Invariant: every row has exactly `columns.len()` cells. The decoder
/// rejects payloads that violate this rather than truncating or padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Ordered column names, taken from the payload header line
    pub columns: Vec<String>,

    /// Result rows, each ordered by column position
    pub rows: Vec<Vec<Cell>>,
}

impl QueryResult {
    /// Number of result rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the query matched nothing (header-only payload).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row as a column-name map (for convenience).
    pub fn row_as_map(&self, row_idx: usize) -> Option<HashMap<String, Cell>> {
        let row = self.rows.get(row_idx)?;
        let mut map = HashMap::with_capacity(self.columns.len());
        for (name, cell) in self.columns.iter().zip(row) {
            map.insert(name.clone(), cell.clone());
        }
        Some(map)
    }
}
