//! RDB adapter: query, exec and batch over the HTTP transport.

use crate::decode::decode_table;
use crate::error::{CombinatorError, Result};
use crate::models::{ExecResult, QueryRequest, QueryResult, SchemaType};
use crate::transport::Transport;
use bytes::Bytes;
use log::{debug, warn};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Header identifying the RDB instance a request addresses.
const RDB_ID_HEADER: &str = "X-Combinator-RDB-ID";

/// Client for one RDB instance on the gateway.
///
/// Constructed via [`CombinatorClient::rdb`](crate::CombinatorClient::rdb).
/// The instance id is fixed at construction; the adapter holds no other
/// state, so clones are cheap and calls may run concurrently.
#[derive(Clone)]
pub struct RdbClient {
    transport: Arc<dyn Transport>,
    instance_id: String,
}

impl RdbClient {
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

    /// Execute a SELECT-like statement and decode the tabular response.
    ///
    /// `schema` optionally declares the expected type of each result column
    /// as `"string"`, `"number"` or `"boolean"` tags; cells are then coerced
    /// per column position. An unrecognized tag fails with
    /// [`CombinatorError::InvalidSchema`] before any request is sent.
    ///
    /// # Example
    /// ```rust,no_run
    /// # async fn example() -> combinator_link::Result<()> {
    /// # let client = combinator_link::CombinatorClient::builder().base_url("http://localhost:8899").build()?;
    /// let rdb = client.rdb("0");
    ///
    /// // Raw text cells
    /// let users = rdb.query("SELECT id, name FROM users", &[], None).await?;
    ///
    /// // Typed cells
    /// let users = rdb
    ///     .query("SELECT id, active FROM users", &[], Some(&["number", "boolean"]))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query(
        &self,
        statement: &str,
        params: &[JsonValue],
        schema: Option<&[&str]>,
    ) -> Result<QueryResult> {
        // Schema shape is a caller contract; validate before touching the
        // network so a bad tag never costs a round trip.
        let schema = match schema {
            Some(tags) => Some(SchemaType::parse_tags(tags)?),
            None => None,
        };

        debug!(
            "[RDB_QUERY] instance={} stmt_len={}",
            self.instance_id,
            statement.len()
        );
        let response = self
            .transport
            .request(
                "POST",
                "/rdb/query",
                &[(RDB_ID_HEADER, self.instance_id.clone())],
                Some(self.request_body(statement, params)?),
            )
            .await?;

        if !response.is_success() {
            warn!(
                "[RDB_QUERY] instance={} failed: status={}",
                self.instance_id,
                response.status()
            );
            return Err(CombinatorError::Query {
                status: response.status(),
            });
        }

        let payload = response.text()?;
        decode_table(&payload, schema.as_deref())
    }

    /// Execute a mutating statement and report the affected row count.
    pub async fn exec(&self, statement: &str, params: &[JsonValue]) -> Result<ExecResult> {
        debug!(
            "[RDB_EXEC] instance={} stmt_len={}",
            self.instance_id,
            statement.len()
        );
        let response = self
            .transport
            .request(
                "POST",
                "/rdb/exec",
                &[(RDB_ID_HEADER, self.instance_id.clone())],
                Some(self.request_body(statement, params)?),
            )
            .await?;

        if !response.is_success() {
            warn!(
                "[RDB_EXEC] instance={} failed: status={}",
                self.instance_id,
                response.status()
            );
            return Err(CombinatorError::Exec {
                status: response.status(),
            });
        }

        response.json::<ExecResult>()
    }

    /// Send an ordered sequence of statements in a single request.
    ///
    /// The wire protocol reports only an aggregate status for the whole
    /// batch; which statement failed cannot be recovered on the client.
    pub async fn batch(&self, statements: &[&str]) -> Result<()> {
        debug!(
            "[RDB_BATCH] instance={} statements={}",
            self.instance_id,
            statements.len()
        );
        let body = serde_json::to_vec(statements)?;
        let response = self
            .transport
            .request(
                "POST",
                "/rdb/batch",
                &[(RDB_ID_HEADER, self.instance_id.clone())],
                Some(Bytes::from(body)),
            )
            .await?;

        if !response.is_success() {
            warn!(
                "[RDB_BATCH] instance={} failed: status={}",
                self.instance_id,
                response.status()
            );
            return Err(CombinatorError::Batch {
                status: response.status(),
            });
        }

        Ok(())
    }

    fn request_body(&self, statement: &str, params: &[JsonValue]) -> Result<Bytes> {
        let request = QueryRequest {
            stmt: statement.to_string(),
            args: params.to_vec(),
        };
        Ok(Bytes::from(serde_json::to_vec(&request)?))
    }
}
