// ============================================================================
// FCA Infrastructure - PostgreSQL Campaign Repository
// File: crates/fca-infrastructure/src/database/postgres/campaign_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::info;

use fca_core::domain::campaign::CAMPAIGN_EDITABLE;
use fca_core::domain::{Campaign, RecordKind, Row};
use fca_core::error::DomainError;
use fca_core::repositories::CampaignRepository;

use super::sql::{classify_error, insert_query, push_assignments, table};

pub struct PgCampaignRepository {
    pool: PgPool,
    schema: String,
}

impl PgCampaignRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    fn table(&self) -> String {
        table(&self.schema, RecordKind::Campaign.table())
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "UPPERCASE")]
struct CampaignRow {
    campaignid: i64,
    tenantid: Option<i64>,
    campaignname: Option<String>,
    startdate: Option<NaiveDate>,
    enddate: Option<NaiveDate>,
    status: Option<i64>,
    fca: Option<i64>,
    ifca: Option<i64>,
    bvshits: Option<i64>,
    bundle: Option<i64>,
    bundletype: Option<String>,
    fcabundlerange: Option<i64>,
    bvshits_to_fca_range: Option<i64>,
    ifcadaterange: Option<i64>,
    rechargetype: Option<String>,
    rechargernr: Option<f64>,
    rechargerbr: Option<f64>,
    description: Option<String>,
    priority: Option<i64>,
    createdby: Option<String>,
    createdate: Option<NaiveDateTime>,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Campaign {
            campaign_id: row.campaignid,
            tenant_id: row.tenantid,
            campaign_name: row.campaignname,
            start_date: row.startdate,
            end_date: row.enddate,
            status: row.status,
            fca: row.fca,
            ifca: row.ifca,
            bvshits: row.bvshits,
            bundle: row.bundle,
            bundle_type: row.bundletype,
            fca_bundle_range: row.fcabundlerange,
            bvshits_to_fca_range: row.bvshits_to_fca_range,
            ifca_date_range: row.ifcadaterange,
            recharge_type: row.rechargetype,
            recharger_nr: row.rechargernr,
            recharger_br: row.rechargerbr,
            description: row.description,
            priority: row.priority,
            created_by: row.createdby,
            create_date: row.createdate,
        }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    async fn list(&self) -> Result<Vec<Campaign>, DomainError> {
        let sql = format!("SELECT * FROM {} ORDER BY \"CAMPAIGNID\"", self.table());
        let rows: Vec<CampaignRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify_error("listing campaigns", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, DomainError> {
        let sql = format!("SELECT * FROM {} WHERE \"CAMPAIGNID\" = $1", self.table());
        let row: Option<CampaignRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify_error("finding campaign", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, row: &Row) -> Result<i64, DomainError> {
        let id: i64 = insert_query(&self.schema, row)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify_error("creating campaign", e))?;

        info!("Campaign created: {}", id);
        Ok(id)
    }

    async fn update(&self, id: i64, row: &Row) -> Result<(), DomainError> {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!("UPDATE {}", self.table()));
        push_assignments(&mut qb, row, &CAMPAIGN_EDITABLE);
        qb.push(" WHERE \"CAMPAIGNID\" = ");
        qb.push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error("updating campaign", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::CampaignNotFound(id));
        }

        info!("Campaign updated: {}", id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE \"CAMPAIGNID\" = $1", self.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify_error("deleting campaign", e))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::CampaignNotFound(id));
        }

        info!("Campaign deleted: {}", id);
        Ok(())
    }
}
