//! Domain errors

use thiserror::Error;

use crate::domain::LookupKey;

/// Failures reported by a record store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate key: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Import session already closed")]
    Closed,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(i64),

    #[error("Lookup not found: {}/{}/{}", .0.campaign_id, .0.retailer_id, .0.product_id)]
    LookupNotFound(LookupKey),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
