// ============================================================================
// FCA Infrastructure - PostgreSQL Log Repository
// File: crates/fca-infrastructure/src/database/postgres/log_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;

use fca_core::domain::LogEntry;
use fca_core::error::DomainError;
use fca_core::repositories::LogRepository;
use fca_shared::constants::LOGS_TABLE;

use super::sql::{classify_error, table};

/// Reads the log table as JSON objects so its columns need not be known here
pub struct PgLogRepository {
    pool: PgPool,
    schema: String,
}

impl PgLogRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl LogRepository for PgLogRepository {
    async fn list(&self) -> Result<Vec<LogEntry>, DomainError> {
        let sql = format!(
            "SELECT row_to_json(l) FROM {} l ORDER BY l.\"COMPENSATIONDATE\" DESC",
            table(&self.schema, LOGS_TABLE)
        );
        let rows: Vec<Value> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_error("listing logs", e))?;

        Ok(rows
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(fields) => Some(LogEntry::new(fields)),
                other => {
                    warn!("Skipping non-object log row: {}", other);
                    None
                }
            })
            .collect())
    }
}
