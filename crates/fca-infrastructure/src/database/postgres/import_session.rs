// ============================================================================
// FCA Infrastructure - PostgreSQL Import Session
// File: crates/fca-infrastructure/src/database/postgres/import_session.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info};

use fca_core::domain::{RecordKind, Row};
use fca_core::error::StoreError;
use fca_core::repositories::{ImportSessionFactory, RecordStore};

use super::sql::{classify_error, insert_query};

/// One transaction spanning a whole spreadsheet import
pub struct PgImportSession {
    tx: Option<Transaction<'static, Postgres>>,
    schema: String,
}

#[async_trait]
impl RecordStore for PgImportSession {
    async fn insert(&mut self, row: &Row) -> Result<Option<i64>, StoreError> {
        let tx = self.tx.as_mut().ok_or(StoreError::Closed)?;
        let mut qb = insert_query(&self.schema, row);
        let context = format!("inserting {} row", row.kind().label());

        match row.kind() {
            RecordKind::Campaign => {
                let id: i64 = qb
                    .build_query_scalar()
                    .fetch_one(&mut **tx)
                    .await
                    .map_err(|e| classify_error(&context, e))?;
                debug!("Inserted campaign {}", id);
                Ok(Some(id))
            }
            RecordKind::Lookup => {
                qb.build()
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| classify_error(&context, e))?;
                Ok(None)
            }
        }
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        let tx = self.tx.take().ok_or(StoreError::Closed)?;
        tx.commit()
            .await
            .map_err(|e| classify_error("committing import", e))?;
        info!("Import transaction committed");
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        let Some(tx) = self.tx.take() else {
            return Ok(());
        };
        tx.rollback()
            .await
            .map_err(|e| classify_error("rolling back import", e))?;
        info!("Import transaction rolled back");
        Ok(())
    }
}

pub struct PgImportSessionFactory {
    pool: PgPool,
    schema: String,
}

impl PgImportSessionFactory {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl ImportSessionFactory for PgImportSessionFactory {
    async fn begin(&self) -> Result<Box<dyn RecordStore>, StoreError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| classify_error("starting import", e))?;
        Ok(Box::new(PgImportSession {
            tx: Some(tx),
            schema: self.schema.clone(),
        }))
    }
}
