//! Tabular result decoding for the RDB query path.
//!
//! The gateway streams query results as delimiter-separated text: one header
//! line of column names followed by zero or more data lines. The format has
//! no quoting and no escaping — a delimiter character embedded in a value is
//! indistinguishable from a field boundary. That is a limitation of the wire
//! format itself; the decoder reproduces it faithfully instead of inventing
//! quoting rules the server never applies. A value containing `,` therefore
//! decodes as extra fields and is rejected as a width mismatch.

use crate::error::{CombinatorError, Result};
use crate::models::{Cell, QueryResult, SchemaType};

/// Field delimiter used by the gateway's tabular output.
const DELIMITER: char = ',';

/// Decode a raw tabular payload into a [`QueryResult`].
///
/// Without a schema every cell stays raw text. With a schema, each cell is
/// coerced per column position; the schema length must match the decoded
/// column count. Every row must have exactly as many fields as the header —
/// a mismatch means the payload is malformed and aborts the decode rather
/// than producing misaligned cells.
pub fn decode_table(payload: &str, schema: Option<&[SchemaType]>) -> Result<QueryResult> {
    let trimmed = payload.trim();
    let mut lines = trimmed.split('\n');

    let header = lines.next().unwrap_or("");
    if header.is_empty() {
        return Err(CombinatorError::Decode(
            "payload has no header line".to_string(),
        ));
    }
    let columns: Vec<String> = header.split(DELIMITER).map(str::to_string).collect();

    if let Some(schema) = schema {
        if schema.len() != columns.len() {
            return Err(CombinatorError::Decode(format!(
                "schema declares {} columns but payload has {}",
                schema.len(),
                columns.len()
            )));
        }
    }

    let mut rows = Vec::new();
    for (line_idx, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != columns.len() {
            return Err(CombinatorError::Decode(format!(
                "row {} has {} fields, expected {}",
                line_idx,
                fields.len(),
                columns.len()
            )));
        }

        let row = match schema {
            Some(schema) => fields
                .iter()
                .zip(schema)
                .map(|(field, schema_type)| coerce_cell(field, *schema_type))
                .collect::<Result<Vec<Cell>>>()?,
            None => fields
                .iter()
                .map(|field| Cell::Text((*field).to_string()))
                .collect(),
        };
        rows.push(row);
    }

    Ok(QueryResult { columns, rows })
}

/// Coerce one raw field per its declared column type.
///
/// `number` parses as f64 and surfaces the failure instead of masking it
/// with a zero or NaN. `boolean` is true iff the field is the literal token
/// `true`, false for anything else. `string` keeps the field unchanged, no
/// trimming, no quote stripping.
fn coerce_cell(field: &str, schema_type: SchemaType) -> Result<Cell> {
    match schema_type {
        SchemaType::Number => field.parse::<f64>().map(Cell::Number).map_err(|_| {
            CombinatorError::Decode(format!("cannot parse \"{}\" as a number", field))
        }),
        SchemaType::Boolean => Ok(Cell::Bool(field == "true")),
        SchemaType::String => Ok(Cell::Text(field.to_string())),
    }
}
