//! Campaign repository trait (port)

use async_trait::async_trait;
use crate::domain::{Campaign, Row};
use crate::error::DomainError;

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// All campaigns by ascending `CAMPAIGNID`
    async fn list(&self) -> Result<Vec<Campaign>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, DomainError>;
    /// Insert and return the generated `CAMPAIGNID`
    async fn create(&self, row: &Row) -> Result<i64, DomainError>;
    /// Overwrite the editable columns only
    async fn update(&self, id: i64, row: &Row) -> Result<(), DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
