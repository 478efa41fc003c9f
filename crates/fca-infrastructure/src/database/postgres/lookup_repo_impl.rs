// ============================================================================
// FCA Infrastructure - PostgreSQL Lookup Repository
// File: crates/fca-infrastructure/src/database/postgres/lookup_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::info;

use fca_core::domain::lookup::LOOKUP_EDITABLE;
use fca_core::domain::{Lookup, LookupKey, RecordKind, Row};
use fca_core::error::DomainError;
use fca_core::repositories::LookupRepository;

use super::sql::{classify_error, insert_query, push_assignments, table};

const KEY_FILTER: &str = "\"CAMPAIGNID\" = $1 AND \"RETAILERID\" = $2 AND \"PRODUCTID\" = $3";

pub struct PgLookupRepository {
    pool: PgPool,
    schema: String,
}

impl PgLookupRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    fn table(&self) -> String {
        table(&self.schema, RecordKind::Lookup.table())
    }
}

#[derive(Debug, FromRow)]
#[sqlx(rename_all = "UPPERCASE")]
struct LookupRow {
    campaignid: i64,
    retailerid: String,
    productid: String,
    startdate: Option<NaiveDate>,
    enddate: Option<NaiveDate>,
    target: Option<i64>,
    commission: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    cap: Option<i64>,
    modificationdate: Option<NaiveDateTime>,
}

impl From<LookupRow> for Lookup {
    fn from(row: LookupRow) -> Self {
        Lookup {
            campaign_id: row.campaignid,
            retailer_id: row.retailerid,
            product_id: row.productid,
            start_date: row.startdate,
            end_date: row.enddate,
            target: row.target,
            commission: row.commission,
            min: row.min,
            max: row.max,
            cap: row.cap,
            modification_date: row.modificationdate,
        }
    }
}

#[async_trait]
impl LookupRepository for PgLookupRepository {
    async fn list(&self) -> Result<Vec<Lookup>, DomainError> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY \"CAMPAIGNID\", \"RETAILERID\", \"PRODUCTID\"",
            self.table()
        );
        let rows: Vec<LookupRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_error("listing lookups", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, key: &LookupKey) -> Result<Option<Lookup>, DomainError> {
        let sql = format!("SELECT * FROM {} WHERE {}", self.table(), KEY_FILTER);
        let row: Option<LookupRow> = sqlx::query_as(&sql)
            .bind(key.campaign_id)
            .bind(&key.retailer_id)
            .bind(&key.product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_error("finding lookup", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, row: &Row) -> Result<(), DomainError> {
        insert_query(&self.schema, row)
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error("creating lookup", e))?;

        info!(
            "Lookup created: {:?}/{:?}/{:?}",
            row.get("CAMPAIGNID"),
            row.text("RETAILERID"),
            row.text("PRODUCTID")
        );
        Ok(())
    }

    async fn update(&self, key: &LookupKey, row: &Row) -> Result<(), DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!("UPDATE {}", self.table()));
        push_assignments(&mut qb, row, &LOOKUP_EDITABLE);
        qb.push(", \"MODIFICATIONDATE\" = CURRENT_TIMESTAMP WHERE \"CAMPAIGNID\" = ");
        qb.push_bind(key.campaign_id);
        qb.push(" AND \"RETAILERID\" = ");
        qb.push_bind(key.retailer_id.clone());
        qb.push(" AND \"PRODUCTID\" = ");
        qb.push_bind(key.product_id.clone());

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error("updating lookup", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::LookupNotFound(key.clone()));
        }

        info!("Lookup updated: {:?}", key);
        Ok(())
    }

    async fn delete(&self, key: &LookupKey) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE {}", self.table(), KEY_FILTER);
        let result = sqlx::query(&sql)
            .bind(key.campaign_id)
            .bind(&key.retailer_id)
            .bind(&key.product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error("deleting lookup", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::LookupNotFound(key.clone()));
        }

        info!("Lookup deleted: {:?}", key);
        Ok(())
    }
}
