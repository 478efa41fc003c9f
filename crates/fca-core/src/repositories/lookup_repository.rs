//! Lookup repository trait (port)

use async_trait::async_trait;
use crate::domain::{Lookup, LookupKey, Row};
use crate::error::DomainError;

#[async_trait]
pub trait LookupRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Lookup>, DomainError>;
    async fn find(&self, key: &LookupKey) -> Result<Option<Lookup>, DomainError>;
    async fn create(&self, row: &Row) -> Result<(), DomainError>;
    /// Overwrite the editable columns of the rule at `key` and stamp `MODIFICATIONDATE`.
    /// A changed `CAMPAIGNID` moves the rule to another campaign.
    async fn update(&self, key: &LookupKey, row: &Row) -> Result<(), DomainError>;
    async fn delete(&self, key: &LookupKey) -> Result<(), DomainError>;
}
