//! # FCA Infrastructure
//!
//! PostgreSQL implementations of the core repository and import-session ports.

pub mod database;

pub use database::{
    create_pool, PgCampaignRepository, PgImportSessionFactory, PgLogRepository,
    PgLookupRepository,
};
