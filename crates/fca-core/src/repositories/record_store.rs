//! Transactional store used by bulk import

use async_trait::async_trait;
use crate::domain::Row;
use crate::error::StoreError;

/// One open import session. Inserts are invisible to other readers until
/// `commit`; `rollback` discards every insert made through the session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send {
    /// Insert one normalized row into the table of its kind.
    /// Returns the generated `CAMPAIGNID` for campaign rows.
    async fn insert(&mut self, row: &Row) -> Result<Option<i64>, StoreError>;
    async fn commit(&mut self) -> Result<(), StoreError>;
    async fn rollback(&mut self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ImportSessionFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn RecordStore>, StoreError>;
}
